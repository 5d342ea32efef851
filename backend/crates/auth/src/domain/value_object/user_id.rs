use kernel::id::Id;

pub use kernel::id::markers::User as UserMarker;
pub type UserId = Id<UserMarker>;
