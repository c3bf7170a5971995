pub mod guard;
pub mod nav;

pub use guard::RequireAuth;
pub use nav::NavBar;
