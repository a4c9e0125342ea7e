use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Acknowledgment body returned by write endpoints.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Ack {
    pub message: &'static str,
}
