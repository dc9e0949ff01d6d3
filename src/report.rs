use photo_to_svg::PhotoSvgError;

pub fn report_error(err: &PhotoSvgError) {
    match err {
        PhotoSvgError::Decode { path, source } => {
            eprintln!("Error: Could not open image file {}", path.display());
            eprintln!("  {source}");
        }
        _ => {
            eprintln!("Error: {err}");
        }
    }
}
