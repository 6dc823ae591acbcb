//! Speaker entity.

/// A presenter referenced by talks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub speaker_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl Speaker {
    /// Returns "First Last", or "First Middle Last" when a middle name is set.
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Input data for registering a speaker.
#[derive(Debug, Clone, Default)]
pub struct NewSpeaker {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl NewSpeaker {
    /// Builds the entity the store returns after inserting this speaker.
    pub fn into_speaker(self, speaker_id: i64) -> Speaker {
        Speaker {
            speaker_id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
            company: self.company,
            company_url: self.company_url,
            blog_url: self.blog_url,
            twitter: self.twitter,
            git_hub: self.git_hub,
        }
    }
}
