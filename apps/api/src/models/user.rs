use serde::{Deserialize, Serialize};

/// School class or level the student is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "8")]
    Class8,
    #[serde(rename = "9")]
    Class9,
    #[serde(rename = "10")]
    Class10,
    #[serde(rename = "11")]
    Class11,
    #[serde(rename = "12")]
    Class12,
    #[serde(rename = "UG")]
    Undergraduate,
    #[serde(rename = "Grad")]
    Graduate,
}

impl Standard {
    /// Senior standards are the only ones that choose a stream.
    pub fn is_senior(self) -> bool {
        matches!(self, Standard::Class11 | Standard::Class12)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    #[serde(rename = "Science (PCM)")]
    SciencePcm,
    #[serde(rename = "Science (PCB)")]
    SciencePcb,
    Commerce,
    #[serde(rename = "Humanities/Arts")]
    Humanities,
}

/// Raw form input as submitted by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub standard: Option<Standard>,
    #[serde(default)]
    pub stream: Option<Stream>,
}

/// Validated student details stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: Option<String>,
    pub standard: Standard,
    pub stream: Option<Stream>,
}
