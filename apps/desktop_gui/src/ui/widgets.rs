use client_core::Marker;
use eframe::egui;

/// Paints one marker as a disc; markers without an image asset show their glyph on top.
pub fn marker_disc(ui: &mut egui::Ui, marker: &Marker, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let [r, g, b] = marker.rgb;
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size * 0.42, egui::Color32::from_rgb(r, g, b));

    if marker.asset.is_none() && marker.glyph != ' ' {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            marker.glyph,
            egui::FontId::proportional(size * 0.5),
            egui::Color32::WHITE,
        );
    }
    response.on_hover_text(marker.name)
}
