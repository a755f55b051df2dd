//! Shared Tailwind class constants so forms, tables and cards look the same
//! on the public site and in the dashboard.

pub struct Theme;

impl Theme {
    /// Primary brand color for headings and links.
    pub const BRAND_TEXT: &'static str = "text-red-700 dark:text-red-400";

    /// Elevated white panel used for forms and detail views.
    pub const CARD: &'static str = "rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-red-500 focus:border-red-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    pub const TD: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

    pub const LINK: &'static str = "font-medium text-red-700 hover:text-red-900 dark:text-red-400 dark:hover:text-red-300";

    /// Small inline action button inside table rows.
    pub const ROW_ACTION: &'static str = "text-sm font-medium text-gray-600 hover:text-red-700 dark:text-gray-300 dark:hover:text-red-400";

    pub const DANGER_ACTION: &'static str = "text-sm font-medium text-red-600 hover:text-red-800 dark:text-red-400";

    pub const SECONDARY_BUTTON: &'static str = "px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

    pub const BADGE_SUCCESS: &'static str = "inline-flex items-center rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200";

    pub const BADGE_WARNING: &'static str = "inline-flex items-center rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800 dark:bg-amber-900/40 dark:text-amber-200";

    pub const BADGE_DANGER: &'static str = "inline-flex items-center rounded-full bg-red-100 px-2.5 py-0.5 text-xs font-medium text-red-800 dark:bg-red-900/40 dark:text-red-200";
}
