use image::{Rgb, RgbImage};

pub const SIZE: u32 = 1024;

// Medical/health theme colors
pub const BG_COLOR: Rgb<u8> = Rgb([64, 150, 255]); // medical blue
pub const ACCENT_COLOR: Rgb<u8> = Rgb([255, 255, 255]); // white
pub const SECONDARY_COLOR: Rgb<u8> = Rgb([45, 125, 230]); // darker blue

/// Inset of the background disc from each canvas edge, in pixels.
const EDGE_INSET: i32 = 40;

/// Ring positions of the decorative measurement-drop dots, in degrees.
const DOT_ANGLES: [f64; 8] = [30.0, 60.0, 120.0, 150.0, 210.0, 240.0, 300.0, 330.0];

/// Fills every pixel within `radius` of (`cx`, `cy`), clamped to the canvas.
fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let r2 = radius * radius;
    for y in (cy - radius).max(0)..=(cy + radius).min(img.height() as i32 - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(img.width() as i32 - 1) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Fills the axis-aligned rectangle with inclusive corners (`x0`, `y0`)
/// through (`x1`, `y1`), clamped to the canvas.
fn fill_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    for y in y0.max(0)..=y1.min(img.height() as i32 - 1) {
        for x in x0.max(0)..=x1.min(img.width() as i32 - 1) {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Renders the 1024x1024 ControlGlucosa app icon: background disc, medical
/// cross, and eight dots on a ring. Pure function of the constants above;
/// progress lines on stdout are the only other effect.
pub fn render_icon() -> RgbImage {
    let size = SIZE as i32;
    let center = size / 2;
    let radius = size / 2 - EDGE_INSET;

    println!("Creando imagen de {SIZE}x{SIZE}...");
    let mut img = RgbImage::from_pixel(SIZE, SIZE, BG_COLOR);

    println!("Dibujando círculo de fondo...");
    fill_circle(&mut img, center, center, radius, SECONDARY_COLOR);

    println!("Dibujando cruz médica...");
    let cross_thickness = size / 10;
    let cross_length = size / 3;

    // Horizontal arm
    fill_rect(
        &mut img,
        center - cross_length / 2,
        center - cross_thickness / 2,
        center + cross_length / 2,
        center + cross_thickness / 2,
        ACCENT_COLOR,
    );
    // Vertical arm, drawn over the disc and the horizontal arm
    fill_rect(
        &mut img,
        center - cross_thickness / 2,
        center - cross_length / 2,
        center + cross_thickness / 2,
        center + cross_length / 2,
        ACCENT_COLOR,
    );

    println!("Añadiendo elementos decorativos...");
    let dot_size = size / 40;
    for angle in DOT_ANGLES {
        let rad = angle.to_radians();
        // Truncation toward zero keeps the dot centers on the same pixels
        // the original asset used.
        let x = center + (radius as f64 * 0.8 * rad.cos()) as i32;
        let y = center + (radius as f64 * 0.8 * rad.sin()) as i32;
        fill_circle(&mut img, x, y, dot_size, ACCENT_COLOR);
    }

    img
}
