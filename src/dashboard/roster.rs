use crate::http_handler::http_response::{astros::AstrosResponse, response_common::SchemaError};

/// One person currently reported to be in space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    name: String,
    craft: Option<String>,
}

impl CrewMember {
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn craft(&self) -> Option<&str> { self.craft.as_deref() }
}

/// The people currently in space, in upstream order.
///
/// `people().len() == count()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstronautRoster {
    count: usize,
    people: Vec<CrewMember>,
}

impl AstronautRoster {
    pub fn count(&self) -> usize { self.count }
    pub fn people(&self) -> &[CrewMember] { &self.people }
    pub fn names(&self) -> Vec<&str> { self.people.iter().map(CrewMember::name).collect() }
}

impl TryFrom<AstrosResponse> for AstronautRoster {
    type Error = SchemaError;

    /// Takes exactly `number` entries from `people`.
    ///
    /// Surplus entries are ignored; a list shorter than `number` is a
    /// `SchemaError::CountMismatch`.
    fn try_from(value: AstrosResponse) -> Result<Self, Self::Error> {
        let declared = value.number();
        let entries = value.people();
        let mut people = Vec::with_capacity(declared.min(entries.len()));
        for i in 0..declared {
            let entry = entries
                .get(i)
                .ok_or(SchemaError::CountMismatch { declared, available: entries.len() })?;
            people.push(CrewMember {
                name: entry.name().to_string(),
                craft: entry.craft().map(str::to_string),
            });
        }
        Ok(Self { count: declared, people })
    }
}
