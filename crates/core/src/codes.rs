//! Lookup enums shared by the DTOs.
//!
//! Each enum serializes as a stable short code and parses back from either
//! its code or its human label, case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string did not match any code or label of a lookup enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct CodeParseError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The wire code.
            pub fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// The human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CodeParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.code().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| CodeParseError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

define_code_enum! {
    /// Kind of phone line.
    PhoneType {
        Mobile = ("mobile", "Mobile"),
        Home = ("home", "Home"),
        Work = ("work", "Work"),
        Fax = ("fax", "Fax"),
        Other = ("other", "Other"),
    }
}

define_code_enum! {
    /// Kind of email address.
    EmailType {
        Personal = ("personal", "Personal"),
        Work = ("work", "Work"),
        School = ("school", "School"),
        Other = ("other", "Other"),
    }
}

define_code_enum! {
    /// What a postal address is used for.
    AddressType {
        Home = ("home", "Home"),
        Work = ("work", "Work"),
        Billing = ("billing", "Billing"),
        Mailing = ("mailing", "Mailing"),
        Other = ("other", "Other"),
    }
}

define_code_enum! {
    Pronouns {
        HeHim = ("he/him", "He/Him"),
        SheHer = ("she/her", "She/Her"),
        TheyThem = ("they/them", "They/Them"),
        Other = ("other", "Other"),
    }
}

define_code_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Planned = ("planned", "Planned"),
        Active = ("active", "Active"),
        OnHold = ("on_hold", "On Hold"),
        Completed = ("completed", "Completed"),
        Cancelled = ("cancelled", "Cancelled"),
    }
}

define_code_enum! {
    /// Project task lifecycle status.
    TaskStatus {
        NotStarted = ("not_started", "Not Started"),
        InProgress = ("in_progress", "In Progress"),
        Blocked = ("blocked", "Blocked"),
        Done = ("done", "Done"),
    }
}

define_code_enum! {
    /// US states, the District of Columbia, and inhabited territories.
    UsState {
        Alabama = ("AL", "Alabama"),
        Alaska = ("AK", "Alaska"),
        Arizona = ("AZ", "Arizona"),
        Arkansas = ("AR", "Arkansas"),
        California = ("CA", "California"),
        Colorado = ("CO", "Colorado"),
        Connecticut = ("CT", "Connecticut"),
        Delaware = ("DE", "Delaware"),
        DistrictOfColumbia = ("DC", "District of Columbia"),
        Florida = ("FL", "Florida"),
        Georgia = ("GA", "Georgia"),
        Hawaii = ("HI", "Hawaii"),
        Idaho = ("ID", "Idaho"),
        Illinois = ("IL", "Illinois"),
        Indiana = ("IN", "Indiana"),
        Iowa = ("IA", "Iowa"),
        Kansas = ("KS", "Kansas"),
        Kentucky = ("KY", "Kentucky"),
        Louisiana = ("LA", "Louisiana"),
        Maine = ("ME", "Maine"),
        Maryland = ("MD", "Maryland"),
        Massachusetts = ("MA", "Massachusetts"),
        Michigan = ("MI", "Michigan"),
        Minnesota = ("MN", "Minnesota"),
        Mississippi = ("MS", "Mississippi"),
        Missouri = ("MO", "Missouri"),
        Montana = ("MT", "Montana"),
        Nebraska = ("NE", "Nebraska"),
        Nevada = ("NV", "Nevada"),
        NewHampshire = ("NH", "New Hampshire"),
        NewJersey = ("NJ", "New Jersey"),
        NewMexico = ("NM", "New Mexico"),
        NewYork = ("NY", "New York"),
        NorthCarolina = ("NC", "North Carolina"),
        NorthDakota = ("ND", "North Dakota"),
        Ohio = ("OH", "Ohio"),
        Oklahoma = ("OK", "Oklahoma"),
        Oregon = ("OR", "Oregon"),
        Pennsylvania = ("PA", "Pennsylvania"),
        RhodeIsland = ("RI", "Rhode Island"),
        SouthCarolina = ("SC", "South Carolina"),
        SouthDakota = ("SD", "South Dakota"),
        Tennessee = ("TN", "Tennessee"),
        Texas = ("TX", "Texas"),
        Utah = ("UT", "Utah"),
        Vermont = ("VT", "Vermont"),
        Virginia = ("VA", "Virginia"),
        Washington = ("WA", "Washington"),
        WestVirginia = ("WV", "West Virginia"),
        Wisconsin = ("WI", "Wisconsin"),
        Wyoming = ("WY", "Wyoming"),
        AmericanSamoa = ("AS", "American Samoa"),
        Guam = ("GU", "Guam"),
        NorthernMarianaIslands = ("MP", "Northern Mariana Islands"),
        PuertoRico = ("PR", "Puerto Rico"),
        VirginIslands = ("VI", "U.S. Virgin Islands"),
    }
}

define_code_enum! {
    /// Canadian provinces and territories.
    CaProvince {
        Alberta = ("AB", "Alberta"),
        BritishColumbia = ("BC", "British Columbia"),
        Manitoba = ("MB", "Manitoba"),
        NewBrunswick = ("NB", "New Brunswick"),
        NewfoundlandAndLabrador = ("NL", "Newfoundland and Labrador"),
        NorthwestTerritories = ("NT", "Northwest Territories"),
        NovaScotia = ("NS", "Nova Scotia"),
        Nunavut = ("NU", "Nunavut"),
        Ontario = ("ON", "Ontario"),
        PrinceEdwardIsland = ("PE", "Prince Edward Island"),
        Quebec = ("QC", "Quebec"),
        Saskatchewan = ("SK", "Saskatchewan"),
        Yukon = ("YT", "Yukon"),
    }
}

define_code_enum! {
    /// Mexican states plus Mexico City, keyed by their ISO 3166-2:MX codes.
    MxState {
        Aguascalientes = ("AGU", "Aguascalientes"),
        BajaCalifornia = ("BCN", "Baja California"),
        BajaCaliforniaSur = ("BCS", "Baja California Sur"),
        Campeche = ("CAM", "Campeche"),
        Chiapas = ("CHP", "Chiapas"),
        Chihuahua = ("CHH", "Chihuahua"),
        CiudadDeMexico = ("CMX", "Ciudad de México"),
        Coahuila = ("COA", "Coahuila"),
        Colima = ("COL", "Colima"),
        Durango = ("DUR", "Durango"),
        Guanajuato = ("GUA", "Guanajuato"),
        Guerrero = ("GRO", "Guerrero"),
        Hidalgo = ("HID", "Hidalgo"),
        Jalisco = ("JAL", "Jalisco"),
        Mexico = ("MEX", "Estado de México"),
        Michoacan = ("MIC", "Michoacán"),
        Morelos = ("MOR", "Morelos"),
        Nayarit = ("NAY", "Nayarit"),
        NuevoLeon = ("NLE", "Nuevo León"),
        Oaxaca = ("OAX", "Oaxaca"),
        Puebla = ("PUE", "Puebla"),
        Queretaro = ("QUE", "Querétaro"),
        QuintanaRoo = ("ROO", "Quintana Roo"),
        SanLuisPotosi = ("SLP", "San Luis Potosí"),
        Sinaloa = ("SIN", "Sinaloa"),
        Sonora = ("SON", "Sonora"),
        Tabasco = ("TAB", "Tabasco"),
        Tamaulipas = ("TAM", "Tamaulipas"),
        Tlaxcala = ("TLA", "Tlaxcala"),
        Veracruz = ("VER", "Veracruz"),
        Yucatan = ("YUC", "Yucatán"),
        Zacatecas = ("ZAC", "Zacatecas"),
    }
}
