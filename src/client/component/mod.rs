pub mod form_field;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;

pub use form_field::{field_error, FormError, TextField};
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::CursorPagination;
pub use protected_layout::RequiresLoggedIn;
