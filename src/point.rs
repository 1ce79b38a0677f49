use std::fmt;
use std::path::Path;

/// A named geographic coordinate taken from one image.
///
/// Latitude and longitude are decimal degrees, positive for North and East.
/// Values are kept as they were read from the EXIF block.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    // Name the point after the image file, without its extension.
    pub fn from_image(path: &Path, latitude: f64, longitude: f64) -> Self {
        let name = path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::new(name, latitude, longitude)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_fmt(format_args!("{} ({}, {})", self.name,
                                         self.latitude, self.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_drops_only_the_last_extension() {
        let p = GeoPoint::from_image(Path::new("trip/day1/IMG_0001.JPG"),
                                     1.0, 2.0);
        assert_eq!(p.name(), "IMG_0001");

        let p = GeoPoint::from_image(Path::new("beach.edited.jpeg"), 1.0, 2.0);
        assert_eq!(p.name(), "beach.edited");
    }

    #[test]
    fn display_shows_name_and_coordinates() {
        let p = GeoPoint::new("Image1", 51.5074, -0.1276);
        assert_eq!(p.to_string(), "Image1 (51.5074, -0.1276)");
    }
}
