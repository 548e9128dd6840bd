use chrono::NaiveDateTime;

use crate::schema::god_facts;

/// Status of a fact that is not yet visible to readers.
pub const STATUS_DRAFT: &str = "draft";

/// Status of a fact that readers can see.
pub const STATUS_PUBLISHED: &str = "published";

/// Model representing an editorial fact with optional media.
///
/// `category` is one of science, history, prophecy, miracles or creation by
/// convention; neither it nor `status` is checked here.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = god_facts)]
pub struct GodFact {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub source: Option<String>,
    pub image_filename: Option<String>,
    pub video_filename: Option<String>,
    pub status: String,
    pub views: i32,
    pub featured: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl GodFact {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }
}

#[derive(Clone, Copy, Debug, Default, Insertable)]
#[diesel(table_name = god_facts)]
pub struct NewGodFact<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub source: Option<&'a str>,
    pub image_filename: Option<&'a str>,
    pub video_filename: Option<&'a str>,
}
