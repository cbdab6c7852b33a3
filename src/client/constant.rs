pub const SITE_NAME: &str = "MemberDesk";

/// Rows per dashboard page.
pub const PAGE_SIZE: u32 = 10;
