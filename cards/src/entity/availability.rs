pub const UNAVAILABLE: &str = "unavailable";
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Availability {
    #[display("online")]
    Online,
    #[display("offline")]
    Offline,
}

impl Availability {
    //a missing state counts as offline
    pub fn of(state: Option<&str>) -> Self {
        match state {
            None | Some(UNAVAILABLE) | Some(UNKNOWN) => Availability::Offline,
            Some(_) => Availability::Online,
        }
    }

    pub fn is_online(self) -> bool {
        self == Availability::Online
    }
}
