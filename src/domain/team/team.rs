/// Reference data for a team: its name and the URL of its crest image
///
/// The name is the key goal events are joined on, so it is kept exactly as
/// the directory supplies it.
///
/// # Example
/// ```
/// use footybot_api::domain::team::TeamInfo;
///
/// let team = TeamInfo::new("Arsenal", "https://crests.example/arsenal.png");
/// assert_eq!(team.name, "Arsenal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInfo {
    pub name: String,
    pub crest_url: String,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, crest_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            crest_url: crest_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_keeps_name_verbatim() {
        let team = TeamInfo::new(" Brighton ", "urlB");

        assert_eq!(team.name, " Brighton ");
        assert_eq!(team.crest_url, "urlB");
    }
}
