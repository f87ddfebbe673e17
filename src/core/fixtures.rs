//! Hardcoded mock data shown by the dashboard panels.
//!
//! Nothing here is computed. Every table is a static fixture standing in for a
//! data source the demo does not have.

/// Operational status of a patrol unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolStatus {
    Active,
    Inactive,
    Busy,
}

impl PatrolStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Busy => "Busy",
        }
    }

    /// Returns the map marker color as a hex code.
    #[must_use]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Self::Active => "#00FF00",
            Self::Inactive => "#FF0000",
            Self::Busy => "#FFA500",
        }
    }

    /// Returns the map marker color as RGB components.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Active => (0x00, 0xFF, 0x00),
            Self::Inactive => (0xFF, 0x00, 0x00),
            Self::Busy => (0xFF, 0xA5, 0x00),
        }
    }

    /// Returns every status, in legend order.
    #[must_use]
    pub const fn all() -> &'static [PatrolStatus] {
        &[
            PatrolStatus::Active,
            PatrolStatus::Inactive,
            PatrolStatus::Busy,
        ]
    }
}

/// A patrol unit on the live map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolUnit {
    pub latitude: f64,
    pub longitude: f64,
    pub status: PatrolStatus,
    pub city: &'static str,
}

/// Marker size used for every patrol point.
pub const PATROL_MARKER_SIZE: u16 = 10;

/// A patrol unit joined with its marker styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub color: &'static str,
    pub size: u16,
    pub unit: PatrolUnit,
}

pub static PATROL_UNITS: [PatrolUnit; 8] = [
    PatrolUnit {
        latitude: 24.8607,
        longitude: 67.0011,
        status: PatrolStatus::Active,
        city: "Karachi",
    },
    PatrolUnit {
        latitude: 24.9200,
        longitude: 67.0200,
        status: PatrolStatus::Inactive,
        city: "Karachi",
    },
    PatrolUnit {
        latitude: 24.9300,
        longitude: 67.0500,
        status: PatrolStatus::Busy,
        city: "Karachi",
    },
    PatrolUnit {
        latitude: 33.6844,
        longitude: 73.0479,
        status: PatrolStatus::Active,
        city: "Islamabad",
    },
    PatrolUnit {
        latitude: 33.5651,
        longitude: 73.0169,
        status: PatrolStatus::Inactive,
        city: "Rawalpindi",
    },
    PatrolUnit {
        latitude: 31.5497,
        longitude: 74.3436,
        status: PatrolStatus::Busy,
        city: "Lahore",
    },
    PatrolUnit {
        latitude: 34.0151,
        longitude: 71.5249,
        status: PatrolStatus::Active,
        city: "Peshawar",
    },
    PatrolUnit {
        latitude: 30.1798,
        longitude: 66.9750,
        status: PatrolStatus::Inactive,
        city: "Quetta",
    },
];

/// Joins every patrol unit with its status color.
#[must_use]
pub fn patrol_points() -> Vec<PatrolPoint> {
    PATROL_UNITS
        .iter()
        .map(|unit| PatrolPoint {
            latitude: unit.latitude,
            longitude: unit.longitude,
            color: unit.status.color_code(),
            size: PATROL_MARKER_SIZE,
            unit: *unit,
        })
        .collect()
}

/// Headline metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

impl Metric {
    /// Whether the delta is a decrease.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.delta.starts_with('-')
    }
}

pub static METRICS: [Metric; 4] = [
    Metric {
        label: "Active Patrol Units",
        value: "15",
        delta: "3",
    },
    Metric {
        label: "Incidents Today",
        value: "22",
        delta: "-5%",
    },
    Metric {
        label: "Avg Response Time",
        value: "8.4 min",
        delta: "1.2 min",
    },
    Metric {
        label: "AI Assist Used",
        value: "63 times",
        delta: "18 today",
    },
];

/// Row of the recent activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub time: &'static str,
    pub city: &'static str,
    pub activity: &'static str,
    pub result: &'static str,
    pub officer: &'static str,
}

pub static ACTIVITY_LOG: [ActivityEntry; 4] = [
    ActivityEntry {
        time: "09:30",
        city: "Islamabad",
        activity: "License Plate Scan",
        result: "Stolen Car Recovered",
        officer: "ISB-42",
    },
    ActivityEntry {
        time: "11:15",
        city: "Karachi",
        activity: "Facial Recognition",
        result: "Wanted Person Identified",
        officer: "KHI-15",
    },
    ActivityEntry {
        time: "13:45",
        city: "Lahore",
        activity: "Traffic Monitoring",
        result: "Traffic Flow Optimized",
        officer: "LHR-23",
    },
    ActivityEntry {
        time: "15:20",
        city: "Rawalpindi",
        activity: "Crowd Analysis",
        result: "Peaceful Protest Monitored",
        officer: "RWP-08",
    },
];

/// Row of the simulated object detection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub object: &'static str,
    /// Confidence in percent.
    pub confidence: u8,
    pub status: &'static str,
}

pub static DETECTIONS: [Detection; 5] = [
    Detection {
        object: "Motorcycle",
        confidence: 97,
        status: "Normal",
    },
    Detection {
        object: "Car",
        confidence: 95,
        status: "Suspicious",
    },
    Detection {
        object: "License Plate",
        confidence: 99,
        status: "Verified",
    },
    Detection {
        object: "Person",
        confidence: 92,
        status: "Normal",
    },
    Detection {
        object: "Traffic Sign",
        confidence: 98,
        status: "Stop Sign",
    },
];

/// Visual category of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A colored message box with an optional bold title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub kind: CalloutKind,
    pub title: Option<&'static str>,
    pub body: &'static str,
}

impl Callout {
    const fn new(kind: CalloutKind, title: &'static str, body: &'static str) -> Self {
        Self {
            kind,
            title: Some(title),
            body,
        }
    }

    const fn plain(kind: CalloutKind, body: &'static str) -> Self {
        Self {
            kind,
            title: None,
            body,
        }
    }
}

pub static VERIFICATION_ALERTS: [Callout; 3] = [
    Callout::new(CalloutKind::Success, "License Plate Verified:", "LEA 1234"),
    Callout::new(
        CalloutKind::Error,
        "Alert:",
        "Vehicle reported in recent incident",
    ),
    Callout::new(
        CalloutKind::Warning,
        "Recommendation:",
        "Proceed with caution and verify documents",
    ),
];

pub static TRANSLATIONS: [Callout; 2] = [
    Callout::plain(
        CalloutKind::Info,
        "Urdu to English: 'میں مدد چاہتا ہوں' → 'I need help'",
    ),
    Callout::plain(
        CalloutKind::Info,
        "Punjabi to English: 'ਮੈਨੂੰ ਮਦਦ ਦੀ ਲੋੜ ਹੈ' → 'I need assistance'",
    ),
];

pub static DATABASE_CHECKS: [Callout; 3] = [
    Callout::new(CalloutKind::Success, "NADRA Verification:", "Complete"),
    Callout::new(CalloutKind::Success, "Police Record:", "Clear"),
    Callout::new(CalloutKind::Success, "Vehicle Registration:", "Valid"),
];

pub const CAMERA_CAPTION: &str = "Simulated traffic scene in Pakistan";

pub const ETHICS_NOTICE: Callout = Callout::new(
    CalloutKind::Warning,
    "Important:",
    "The A.I.O. system operates under strict ethical guidelines \
     tailored for Pakistan's legal and cultural context.",
);

/// A bullet point with a bold lead-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthicsPoint {
    pub lead: &'static str,
    pub text: &'static str,
}

/// Content of one ethics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EthicsBody {
    Points(&'static [EthicsPoint]),
    Notice(Callout),
}

/// One tab of the ethics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthicsSection {
    pub tab: &'static str,
    pub heading: &'static str,
    pub body: EthicsBody,
}

pub static ETHICS_SECTIONS: [EthicsSection; 3] = [
    EthicsSection {
        tab: "Privacy Protection",
        heading: "Data Privacy Compliance",
        body: EthicsBody::Points(&[
            EthicsPoint {
                lead: "PECA 2016 Compliance:",
                text: "All data handling complies with Pakistan's Prevention of Electronic Crimes Act",
            },
            EthicsPoint {
                lead: "Local Data Storage:",
                text: "All data remains within Pakistan's borders",
            },
            EthicsPoint {
                lead: "Citizen Privacy:",
                text: "Strict protocols protect civilian privacy rights",
            },
            EthicsPoint {
                lead: "Audit Trails:",
                text: "Complete logging of all system access and queries",
            },
        ]),
    },
    EthicsSection {
        tab: "Bias Prevention",
        heading: "Bias Mitigation Strategies",
        body: EthicsBody::Points(&[
            EthicsPoint {
                lead: "Pakistan-specific training data",
                text: "representing diverse demographics",
            },
            EthicsPoint {
                lead: "Regular algorithmic audits",
                text: "for fairness across provinces",
            },
            EthicsPoint {
                lead: "Cultural sensitivity training",
                text: "embedded in AI models",
            },
            EthicsPoint {
                lead: "Multi-lingual support",
                text: "for Urdu, Punjabi, Pashto, and other regional languages",
            },
        ]),
    },
    EthicsSection {
        tab: "Human Oversight",
        heading: "Human-in-the-Loop Protocol",
        body: EthicsBody::Notice(Callout::new(
            CalloutKind::Error,
            "CRITICAL PROTOCOL FOR PAKISTAN DEPLOYMENT",
            "The A.I.O. provides recommendations only. \
             The final decision and responsibility for any police action \
             ALWAYS remains with the trained Pakistani police officer.\n\n\
             All AI recommendations must be verified and approved by a human officer \
             before any action is taken.",
        )),
    },
];
