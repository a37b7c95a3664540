use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = anyhow::Error;

    /// Accepts both the ASCII hyphen and U+2212 for the negative groups
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('\u{2212}', "-").to_ascii_uppercase();

        match BloodGroup::ALL
            .iter()
            .find(|group| group.as_str() == normalized)
        {
            Some(group) => Ok(*group),
            None => bail!("Unknown blood group '{}'", s),
        }
    }
}

/// A registered account as stored in the user table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Age in years (1-120)
    pub age: u8,
    pub blood_group: BloodGroup,
    /// Unique login name
    pub username: String,
    /// Lowercase hex SHA-256 of the password, never the plaintext
    #[serde(skip_serializing)]
    pub password_digest: String,
}

impl UserRecord {
    pub fn new(
        name: String,
        age: u8,
        blood_group: BloodGroup,
        username: String,
        password_digest: String,
    ) -> Self {
        Self {
            name,
            age,
            blood_group,
            username,
            password_digest,
        }
    }
}

/// A registration submission after the form layer has typed it
#[derive(Clone, Debug)]
pub struct Registration {
    pub name: String,
    pub age: u8,
    pub blood_group: BloodGroup,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}
