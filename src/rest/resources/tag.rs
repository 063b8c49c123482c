//! ActionKit tags.

use crate::rest::Entity;

/// The `tag` resource type. Tags only have the generic operations.
#[derive(Clone, Copy, Debug)]
pub struct Tag;

impl Entity for Tag {
    const NAME: &'static str = "tag";
}
