#[cfg(debug_assertions)]
pub fn get_action_url() -> &'static str {
    "http://localhost:3001/leads" // Local collector when developing, so the real sheet stays clean
}

#[cfg(not(debug_assertions))]
pub fn get_action_url() -> &'static str {
    "https://script.google.com/macros/s/AKfycbww_Y2xDyXvHYOKEoTEzFb9AwYNQNbrkoJKPGRZHb7g_I9O-ewYanEUyw1tktImBlNv/exec"
}
