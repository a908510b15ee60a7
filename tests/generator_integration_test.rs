use icon_gen::domain::model::IconResult;
use icon_gen::domain::ports::IconSink;
use icon_gen::{GeneratorConfig, IconError, IconGenerator, LocalStorage, ResizeFilter};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_source(path: &Path, width: u32, height: u32) {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let blue = (255 * x / width) as u8;
        let green = (255 * y / height) as u8;
        *pixel = Rgba([50, green, blue, 255]);
    }
    img.save(path).unwrap();
}

fn config_in(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        source: dir.join("images").join("books_icon.png"),
        output_dir: dir.join("images"),
        ..GeneratorConfig::default()
    }
}

struct ReadOnlySink {
    dir: PathBuf,
}

impl IconSink for ReadOnlySink {
    fn prepare(&self) -> icon_gen::Result<()> {
        Ok(())
    }

    fn write_icon(&self, _file_name: &str, _data: &[u8]) -> icon_gen::Result<PathBuf> {
        Err(IconError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only directory",
        )))
    }

    fn resolve(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[test]
fn test_end_to_end_default_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    write_source(&config.source, 512, 512);

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    let report = generator.run().unwrap();

    assert!(report.all_succeeded());
    assert_eq!(report.summary_line(), "All icons created successfully!");

    for size in [16, 48, 128] {
        let path = config.output_dir.join(format!("icon{}.png", size));
        assert!(path.exists(), "missing {}", path.display());
        assert_eq!(image::image_dimensions(&path).unwrap(), (size, size));
    }
}

#[test]
fn test_non_square_source_is_stretched_to_square() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    write_source(&config.source, 200, 100);

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    generator.run().unwrap();

    for size in [16, 48, 128] {
        let path = config.output_dir.join(format!("icon{}.png", size));
        assert_eq!(image::image_dimensions(&path).unwrap(), (size, size));
    }
}

#[test]
fn test_running_twice_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    write_source(&config.source, 300, 300);
    let icon48 = config.output_dir.join("icon48.png");

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    generator.run().unwrap();
    let first = std::fs::read(&icon48).unwrap();

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    generator.run().unwrap();
    let second = std::fs::read(&icon48).unwrap();

    assert_eq!(image::image_dimensions(&icon48).unwrap(), (48, 48));
    // PNG 編碼不含時間戳記，兩次輸出應完全相同
    assert_eq!(first, second);
}

#[test]
fn test_missing_source_creates_directory_but_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    assert!(!config.output_dir.exists());

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    let err = generator.run().unwrap_err();

    assert!(matches!(err, IconError::SourceNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(config.output_dir.is_dir());
    assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
}

#[test]
fn test_non_image_source_fails_every_size_independently() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(&config.source, "just some text renamed to .png").unwrap();

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    let report = generator.run().unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.failed().count(), 3);
    assert_eq!(
        report.outcomes.iter().map(|o| o.size).collect::<Vec<_>>(),
        vec![16, 48, 128]
    );
    assert!(!config.output_dir.join("icon16.png").exists());
    assert_eq!(
        report.summary_line(),
        "Finished: 0 of 3 icons created, 3 failed"
    );
}

#[test]
fn test_unwritable_sink_reports_every_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    write_source(&config.source, 64, 64);

    let sink = ReadOnlySink {
        dir: config.output_dir.clone(),
    };
    let mut generator = IconGenerator::new(sink, &config);
    let report = generator.run().unwrap();

    assert!(!report.all_succeeded());
    for outcome in &report.outcomes {
        match &outcome.result {
            IconResult::Failed(reason) => assert!(reason.contains("read-only directory")),
            IconResult::Created(path) => panic!("unexpected icon at {}", path.display()),
        }
    }
    assert_ne!(report.summary_line(), "All icons created successfully!");
}

#[test]
fn test_custom_sizes_filter_and_template() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        sizes: vec![32, 256],
        filter: ResizeFilter::CatmullRom,
        name_template: "app-{size}x{size}.png".to_string(),
        output_dir: temp_dir.path().join("dist").join("icons"),
        ..config_in(temp_dir.path())
    };
    std::fs::create_dir_all(config.source.parent().unwrap()).unwrap();
    write_source(&config.source, 100, 100);

    let mut generator = IconGenerator::new(LocalStorage::new(&config.output_dir), &config);
    let report = generator.run().unwrap();

    assert!(report.all_succeeded());
    assert_eq!(
        image::image_dimensions(config.output_dir.join("app-32x32.png")).unwrap(),
        (32, 32)
    );
    assert_eq!(
        image::image_dimensions(config.output_dir.join("app-256x256.png")).unwrap(),
        (256, 256)
    );
}
