use imagen::{config::SceneConfig, pattern::PATTERN_NAMES, PixelFormat, SceneSource};

fn main() -> Result<(), imagen::ImagenError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    std::fs::create_dir_all("out")?;
    for name in PATTERN_NAMES {
        let config = SceneConfig::new(SceneSource::Pattern {
            name: name.to_string(),
            size: "15mm".to_string(),
            format: PixelFormat::Rgb,
            seed: None,
        });
        config.render_to_file(format!("out/patterns_{}.png", name))?;
    }
    Ok(())
}
