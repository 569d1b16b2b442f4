//! Wire types shared between the page helper library and the servers that
//! answer its AJAX form submissions.

pub mod shared;
