//! Route tree. `table` declares who may open each path and compiles on every
//! target so it can be tested; the Leptos tree below binds the same paths to
//! pages and wraps each protected subtree with the matching guard.

pub(crate) mod paths;
pub(crate) mod table;

#[cfg(target_arch = "wasm32")]
mod app_routes;
#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod forbidden;
#[cfg(target_arch = "wasm32")]
mod give_blood;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod register;
#[cfg(target_arch = "wasm32")]
mod requests;

#[cfg(target_arch = "wasm32")]
pub(crate) use forbidden::ForbiddenContent;
#[cfg(target_arch = "wasm32")]
pub(crate) use app_routes::AppRoutes;
