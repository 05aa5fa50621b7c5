//! Banner art shown at the top of a menu screen.

use eframe::egui;

/// Banner height in points
const BANNER_HEIGHT: f32 = 80.0;

/// Banner image with a text fallback
#[derive(Debug, Clone, Default)]
pub struct Banner {
    picture: String,
    fallback_title: String,
}

impl Banner {
    pub fn new(picture: impl Into<String>) -> Self {
        Self {
            picture: picture.into(),
            fallback_title: String::new(),
        }
    }

    pub fn set_picture(&mut self, picture: impl Into<String>) {
        self.picture = picture.into();
    }

    /// Heading drawn instead of the art when it cannot be loaded
    pub fn set_fallback_title(&mut self, title: impl Into<String>) {
        self.fallback_title = title.into();
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    /// Image URI for the egui loaders; art paths carry no extension
    pub fn uri(&self) -> String {
        format!("file://{}.png", self.picture)
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.picture.is_empty() {
            self.show_fallback(ui);
            return;
        }

        let uri = self.uri();
        let loaded = ui.ctx().try_load_texture(
            &uri,
            egui::TextureOptions::default(),
            egui::load::SizeHint::default(),
        );

        match loaded {
            Ok(_) => {
                ui.add(egui::Image::new(uri).max_height(BANNER_HEIGHT));
            }
            Err(e) => {
                tracing::debug!("Banner '{}' unavailable: {}", self.picture, e);
                self.show_fallback(ui);
            }
        }
    }

    fn show_fallback(&self, ui: &mut egui::Ui) {
        ui.add_sized(
            [ui.available_width(), BANNER_HEIGHT],
            egui::Label::new(egui::RichText::new(&self.fallback_title).heading().strong()),
        );
    }
}
