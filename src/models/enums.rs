use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Answer {
    Yes => "yes",
    No => "no",
});

str_enum!(Tone {
    Green => "green",
    Amber => "amber",
    Red => "red",
});

str_enum!(Stage {
    Screening => "screening",
    Select => "select",
    Review => "review",
    Exposures => "exposures",
    Summary => "summary",
});

str_enum!(HazardKind {
    Lassa => "lassa",
    EbolaMarburg => "ebola_marburg",
    Cchf => "cchf",
});

str_enum!(RiskSource {
    Live => "live",
    Fallback => "fallback",
    FallbackError => "fallback_error",
});

impl Stage {
    /// Position in the assessment flow. Back-transitions go to any lower rank.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Screening => 0,
            Self::Select => 1,
            Self::Review => 2,
            Self::Exposures => 3,
            Self::Summary => 4,
        }
    }
}

impl HazardKind {
    pub const ALL: [HazardKind; 3] = [Self::Lassa, Self::EbolaMarburg, Self::Cchf];
}
