pub mod chat_area;
pub mod conversation_list;
pub mod info_panel;
pub mod input_bar;
pub mod interview_table;
pub mod jobs_page;
pub mod nav_bar;
pub mod session_panel;
pub mod toasts;
