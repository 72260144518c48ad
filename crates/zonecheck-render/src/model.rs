#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFacts {
    pub zone: u8,
    pub size_square_meters: f64,
    pub is_flood_zone: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub id: u32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub profile: String,
    pub facts: RenderableFacts,
    pub entries: Vec<RenderableEntry>,
    /// True when `entries` holds only the no-match sentinel.
    pub no_match: bool,
}

pub(crate) fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}
