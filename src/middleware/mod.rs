/*
    * Middleware module entry file. Re-exports our custom middleware:
    * - error_translation (rewrites failed responses via the translator)
    * - boundary (funnels layer errors into the same pipeline)
    * - fallback (terminal 404 responder)
*/

pub mod boundary;
pub mod error_translation;
pub mod fallback;
