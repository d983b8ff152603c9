mod icon;

use std::path::Path;

/// Xcode asset-catalog icon set the PNG lands in. Fixed by the app project,
/// not configurable.
const ICON_DIR: &str = "/Users/alumno/Documents/data_insights/ControlGlucosa/ControlGlucosa/Assets.xcassets/AppIcon.appiconset";
const ICON_FILENAME: &str = "AppIcon-1024.png";

fn main() {
    println!("Iniciando creación del icono...");

    let img = icon::render_icon();

    let filepath = Path::new(ICON_DIR).join(ICON_FILENAME);
    println!("Guardando en: {}", filepath.display());
    img.save(&filepath).expect("failed to write icon PNG");

    println!("✅ Creado: {ICON_FILENAME}");
    println!("¡Icono de la aplicación creado exitosamente!");
}
