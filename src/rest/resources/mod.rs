//! The ActionKit resource types.
//!
//! Each type is a marker implementing [`Entity`](crate::rest::Entity). Bind
//! one to a client with [`EntityClient`](crate::rest::EntityClient), or go
//! through [`ActionKit`](crate::ActionKit):
//!
//! | Type       | Path               | Filter helpers                     |
//! |------------|--------------------|------------------------------------|
//! | [`User`]   | `/rest/v1/user/`   | `find_by_email`, `find_by_state`   |
//! | [`Page`]   | `/rest/v1/page/`   | `find_by_tag`, `find_by_type`      |
//! | [`Action`] | `/rest/v1/action/` | `find_by_user`, `find_by_type`     |
//! | [`Tag`]    | `/rest/v1/tag/`    |                                    |

mod action;
mod page;
mod tag;
mod user;

pub use action::Action;
pub use page::Page;
pub use tag::Tag;
pub use user::User;
