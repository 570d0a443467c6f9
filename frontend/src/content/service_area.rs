//! Coverage around the Bridgwater base, as drawn on the service map.

pub const BASE: (f64, f64) = (51.1289, -2.9916);
pub const DEFAULT_ZOOM: u8 = 11;

/// 15 and 25 miles, in metres.
pub const PRIMARY_RADIUS_M: f64 = 24_140.0;
pub const EXTENDED_RADIUS_M: f64 = 40_234.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Extended,
}

impl Tier {
    pub fn fill_colour(&self) -> &'static str {
        match self {
            Tier::Primary => "#FF9500",
            Tier::Extended => "#4CAF50",
        }
    }

    pub fn marker_radius(&self) -> u32 {
        match self {
            Tier::Primary => 10,
            Tier::Extended => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Primary => "Primary Service Area",
            Tier::Extended => "Extended Service Area",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServicePoint {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub tier: Tier,
}

impl ServicePoint {
    pub fn popup_html(&self) -> String {
        format!("<strong>{}</strong><br><small>{}</small>", self.name, self.tier.label())
    }
}

const fn point(name: &'static str, lat: f64, lng: f64, tier: Tier) -> ServicePoint {
    ServicePoint { name, lat, lng, tier }
}

pub static SERVICE_POINTS: &[ServicePoint] = &[
    point("Bridgwater", 51.1289, -2.9916, Tier::Primary),
    point("Taunton", 51.0186, -3.1037, Tier::Extended),
    point("Weston-super-Mare", 51.3451, -2.7789, Tier::Extended),
    point("Burnham-on-Sea", 51.2395, -2.9933, Tier::Extended),
    point("Highbridge", 51.2095, -2.9716, Tier::Extended),
    point("Wedmore", 51.1806, -2.8506, Tier::Extended),
    point("Glastonbury", 51.1439, -2.7159, Tier::Extended),
    point("Street", 51.1389, -2.7264, Tier::Extended),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_base_is_primary() {
        let primary: Vec<_> = SERVICE_POINTS
            .iter()
            .filter(|p| p.tier == Tier::Primary)
            .collect();
        assert_eq!(primary.len(), 1);
        assert_eq!((primary[0].lat, primary[0].lng), BASE);
    }

    #[test]
    fn tiers_style_markers_differently() {
        assert_eq!(Tier::Primary.marker_radius(), 10);
        assert_eq!(Tier::Extended.marker_radius(), 6);
        assert_ne!(Tier::Primary.fill_colour(), Tier::Extended.fill_colour());
        assert_eq!(
            SERVICE_POINTS[2].popup_html(),
            "<strong>Weston-super-Mare</strong><br><small>Extended Service Area</small>"
        );
    }
}
