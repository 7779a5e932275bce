//! Static catalog of celestial bodies shown in the atlas.
//!
//! Display-oriented parameters: radii and orbit distances are in screen pixels at
//! zoom 1, angular speeds in radians per rendered frame at speed multiplier 1.
//! The catalog is read-only; per-session state (current phase, last rendered
//! position) lives on the `Planet` working copies spawned from it.

use bevy::prelude::*;

/// Identifier for the planets in the catalog, ordered by distance from the Sun.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All planets in catalog order.
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.data().name
    }

    /// Static catalog entry for this planet.
    pub fn data(&self) -> &'static PlanetData {
        &PLANETS[*self as usize]
    }
}

/// Error raised by catalog lookups.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown body: {0}")]
    UnknownBody(String),
}

/// Look up a planet by its display name.
pub fn by_name(name: &str) -> Result<PlanetId, CatalogError> {
    PlanetId::ALL
        .iter()
        .copied()
        .find(|id| id.name() == name)
        .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))
}

/// Static data for one planet.
#[derive(Debug)]
pub struct PlanetData {
    pub id: PlanetId,
    pub name: &'static str,
    /// Display radius in pixels at zoom 1.
    pub radius: f32,
    /// Orbit distance from the viewport centre in pixels at zoom 1.
    pub distance: f32,
    /// Radians advanced per rendered frame at speed multiplier 1.
    pub angular_speed: f64,
    pub color: Color,
    /// Attribute rows for the info panel, shown verbatim in this order.
    pub attributes: &'static [(&'static str, &'static str)],
}

/// Base radius of the Sun in pixels at zoom 1.
pub const SUN_RADIUS: f32 = 25.0;

/// Sun core color.
pub const SUN_CORE_COLOR: Color = Color::srgb(0.992, 0.722, 0.075); // #FDB813

/// Sun glow color (fades to transparent at twice the core radius).
pub const SUN_GLOW_COLOR: Color = Color::srgb(1.0, 0.667, 0.0); // #FFAA00

/// Space background color.
pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.067); // #000011

/// The 8-planet catalog, in orbit order.
static PLANETS: [PlanetData; 8] = [
    PlanetData {
        id: PlanetId::Mercury,
        name: "Mercury",
        radius: 8.0,
        distance: 120.0,
        angular_speed: 0.02,
        color: Color::srgb(0.549, 0.471, 0.325), // #8C7853
        attributes: &[
            ("Surface temp", "-173°C to 427°C"),
            ("Day length", "58.6 Earth days"),
            ("Year length", "88 Earth days"),
            ("Composition", "70% metallic, 30% silicate"),
        ],
    },
    PlanetData {
        id: PlanetId::Venus,
        name: "Venus",
        radius: 12.0,
        distance: 160.0,
        angular_speed: 0.015,
        color: Color::srgb(1.000, 0.776, 0.286), // #FFC649
        attributes: &[
            ("Surface temp", "462°C"),
            ("Day length", "243 Earth days"),
            ("Year length", "225 Earth days"),
            ("Atmosphere", "96% CO₂, thick clouds"),
        ],
    },
    PlanetData {
        id: PlanetId::Earth,
        name: "Earth",
        radius: 14.0,
        distance: 200.0,
        angular_speed: 0.01,
        color: Color::srgb(0.420, 0.576, 0.839), // #6B93D6
        attributes: &[
            ("Surface temp", "-89°C to 58°C"),
            ("Day length", "24 hours"),
            ("Year length", "365.25 days"),
            ("Water coverage", "71% water coverage"),
        ],
    },
    PlanetData {
        id: PlanetId::Mars,
        name: "Mars",
        radius: 10.0,
        distance: 240.0,
        angular_speed: 0.008,
        color: Color::srgb(0.804, 0.361, 0.361), // #CD5C5C
        attributes: &[
            ("Surface temp", "-87°C to -5°C"),
            ("Day length", "24.6 hours"),
            ("Year length", "687 Earth days"),
            ("Atmosphere", "Thin, mostly CO₂"),
        ],
    },
    PlanetData {
        id: PlanetId::Jupiter,
        name: "Jupiter",
        radius: 35.0,
        distance: 320.0,
        angular_speed: 0.005,
        color: Color::srgb(0.847, 0.792, 0.616), // #D8CA9D
        attributes: &[
            ("Surface temp", "-108°C"),
            ("Day length", "9.9 hours"),
            ("Year length", "12 Earth years"),
            ("Composition", "Gas giant, 79 moons"),
        ],
    },
    PlanetData {
        id: PlanetId::Saturn,
        name: "Saturn",
        radius: 30.0,
        distance: 400.0,
        angular_speed: 0.003,
        color: Color::srgb(0.980, 0.835, 0.647), // #FAD5A5
        attributes: &[
            ("Surface temp", "-139°C"),
            ("Day length", "10.7 hours"),
            ("Year length", "29 Earth years"),
            ("Features", "Prominent ring system"),
        ],
    },
    PlanetData {
        id: PlanetId::Uranus,
        name: "Uranus",
        radius: 20.0,
        distance: 480.0,
        angular_speed: 0.002,
        color: Color::srgb(0.310, 0.816, 0.906), // #4FD0E7
        attributes: &[
            ("Surface temp", "-197°C"),
            ("Day length", "17.2 hours"),
            ("Year length", "84 Earth years"),
            ("Tilt", "Rotates on its side"),
        ],
    },
    PlanetData {
        id: PlanetId::Neptune,
        name: "Neptune",
        radius: 18.0,
        distance: 560.0,
        angular_speed: 0.001,
        color: Color::srgb(0.294, 0.439, 0.867), // #4B70DD
        attributes: &[
            ("Surface temp", "-201°C"),
            ("Day length", "16.1 hours"),
            ("Year length", "165 Earth years"),
            ("Winds", "Fastest winds in solar system"),
        ],
    },
];

/// All catalog entries in orbit order.
pub fn all_planets() -> &'static [PlanetData] {
    &PLANETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_planets() {
        assert_eq!(all_planets().len(), 8);
        assert_eq!(PlanetId::ALL.len(), 8);
    }

    #[test]
    fn test_catalog_order_matches_ids() {
        for (i, planet) in all_planets().iter().enumerate() {
            assert_eq!(planet.id as usize, i);
            assert_eq!(planet.id.data().name, planet.name);
        }
    }

    #[test]
    fn test_earth_is_third() {
        assert_eq!(PlanetId::ALL[2], PlanetId::Earth);
        assert_eq!(PlanetId::Earth.name(), "Earth");
    }

    #[test]
    fn test_outer_planets_are_slower() {
        let speeds: Vec<f64> = all_planets().iter().map(|p| p.angular_speed).collect();
        for pair in speeds.windows(2) {
            assert!(pair[1] < pair[0], "angular speed must decrease outward");
        }
    }

    #[test]
    fn test_distances_increase_outward() {
        let distances: Vec<f32> = all_planets().iter().map(|p| p.distance).collect();
        for pair in distances.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_every_planet_has_attributes() {
        for planet in all_planets() {
            assert!(!planet.attributes.is_empty(), "{} has no attributes", planet.name);
            for (label, value) in planet.attributes {
                assert!(!label.is_empty());
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("Saturn"), Ok(PlanetId::Saturn));
        assert_eq!(
            by_name("Pluto"),
            Err(CatalogError::UnknownBody("Pluto".to_string()))
        );
    }
}
