use serde::Serialize;

/// Human-readable classification of an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevel {
    pub text: &'static str,
    #[serde(rename = "color")]
    pub color_hex: &'static str,
    pub advice: &'static str,
}

/// Levels for AQI 1 through 5, in order.
static LEVELS: [SeverityLevel; 5] = [
    SeverityLevel {
        text: "Good 😊",
        color_hex: "#4CAF50",
        advice: "Air quality is excellent. Enjoy outdoor activities.",
    },
    SeverityLevel {
        text: "Fair 🙂",
        color_hex: "#8BC34A",
        advice: "Air quality is acceptable for most people.",
    },
    SeverityLevel {
        text: "Moderate 😐",
        color_hex: "#FFC107",
        advice: "Sensitive individuals should limit outdoor exertion.",
    },
    SeverityLevel {
        text: "Poor 😷",
        color_hex: "#FF5722",
        advice: "Unhealthy for sensitive groups. Reduce outdoor activity.",
    },
    SeverityLevel {
        text: "Very Poor ☠️",
        color_hex: "#B71C1C",
        advice: "Hazardous! Stay indoors and avoid outdoor activities.",
    },
];

static UNKNOWN: SeverityLevel = SeverityLevel {
    text: "Unknown",
    color_hex: "#999",
    advice: "No data",
};

impl SeverityLevel {
    /// Level for an upstream AQI value. Anything outside 1..=5 maps to the
    /// "Unknown" entry.
    pub fn for_index(aqi: i64) -> &'static SeverityLevel {
        aqi.checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| LEVELS.get(i))
            .unwrap_or(Self::unknown())
    }

    pub fn unknown() -> &'static SeverityLevel {
        &UNKNOWN
    }

    pub fn is_unknown(&self) -> bool {
        *self == UNKNOWN
    }
}
