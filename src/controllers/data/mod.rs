pub mod render_request;
