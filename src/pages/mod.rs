pub mod about;
pub mod index;
pub mod post;

pub use about::About;
pub use index::Index;
pub use post::{Post, PostInitialProps, PostQuery, get_initial_props};
