//! Closed value domains for complaint classification and progress.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error returned when a string names no variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Name of the enum that failed to parse.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

/// Declares a closed enum whose wire names double as its display form.
///
/// Variant order is the canonical ordering used by reports.
macro_rules! closed_enum {
    (
        $(#[$outer:meta])*
        $name:ident as $kind:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in canonical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire name of the variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: value.to_owned(),
                    }),
                }
            }
        }
    };
}

closed_enum! {
    /// Subject area a complaint is filed under.
    ComplaintCategory as "category" {
        Service => "Service",
        Technical => "Technical",
        Staff => "Staff",
        Delivery => "Delivery",
        Billing => "Billing",
        Other => "Other",
    }
}

closed_enum! {
    /// Team a complaint is routed to.
    ///
    /// Shares the category value domain but is chosen independently of the
    /// complaint's own category.
    Department as "department" {
        Service => "Service",
        Technical => "Technical",
        Staff => "Staff",
        Delivery => "Delivery",
        Billing => "Billing",
        Other => "Other",
    }
}

closed_enum! {
    /// Urgency recorded at intake.
    ComplaintPriority as "priority" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

closed_enum! {
    /// Progress of a complaint through triage.
    ComplaintStatus as "status" {
        /// Filed, nobody has picked it up yet.
        Pending => "Pending",
        /// Assigned or otherwise being worked on.
        InProgress => "In-Progress",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

impl Default for ComplaintPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl ComplaintStatus {
    /// Whether the status counts as a completed resolution for reports.
    #[must_use]
    pub const fn is_resolution(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}
