use imagen::{
    codec,
    image::{center, tile, Matte},
    page::{default_resolution, Page},
    render, view,
};

fn main() -> Result<(), imagen::ImagenError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: picture <input.png>");
        std::process::exit(2);
    };

    std::fs::create_dir_all("out")?;
    let source = codec::read(&input)?;
    let page = Page::default();
    let resolution = default_resolution();

    log::info!("writing out/image_tile.png");
    codec::write("out/image_tile.png", render(tile(source.scale(0.25)?), &page, resolution))?;

    log::info!("writing out/image_center.png");
    let centered = center(source.clone(), Matte::White.rgba());
    codec::write("out/image_center.png", render(centered, &page, resolution))?;

    // the same picture turned upside down
    log::info!("writing out/image_flipped.png");
    let flipped = view(center(source, Matte::Black.rgba()), |x, y| (-x, -y));
    codec::write("out/image_flipped.png", render(flipped, &page, resolution))?;
    Ok(())
}
