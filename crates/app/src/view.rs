/// Anything that draws itself into an egui [Ui](egui::Ui).
pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui);
}
