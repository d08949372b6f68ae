//! Storefront sites and their brand details.

use serde::{Deserialize, Serialize};

/// Brand details used to frame the assistant's replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub website: &'static str,
    pub region: &'static str,
}

const CONTAINER_BAZAR: Brand = Brand {
    name: "ContainerBazar",
    website: "https://containerbazar.com",
    region: "India",
};

const CONTAINERS_CLUB: Brand = Brand {
    name: "Containers Club",
    website: "https://containersclub.com",
    region: "United States",
};

/// Storefront the chat widget is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    /// Primary brand (India)
    #[default]
    ContainerBazar,
    /// US brand
    ContainersClub,
}

impl Site {
    /// Parses a site code sent by the front end.
    ///
    /// Only `containersclub` selects the US brand; every other value,
    /// including an empty one, maps to the primary brand.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("containersclub") {
            Site::ContainersClub
        } else {
            Site::ContainerBazar
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Site::ContainerBazar => "containerbazar",
            Site::ContainersClub => "containersclub",
        }
    }

    pub fn brand(&self) -> &'static Brand {
        match self {
            Site::ContainerBazar => &CONTAINER_BAZAR,
            Site::ContainersClub => &CONTAINERS_CLUB,
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
