use business::domain::session::model::Session;

use super::escape::escape_html;

pub fn render_session(session: &Session) -> String {
    match session.user() {
        Some(user) => format!(
            r#"<div class="auth" id="authPanel">
  <span id="authStatus">Logged in</span>
  <span id="authUser">User: {user}</span>
  <form method="post" action="/session/logout"><button type="submit">Logout</button></form>
</div>"#,
            user = escape_html(user)
        ),
        None => r#"<div class="auth" id="authPanel">
  <span id="authStatus">Not logged in</span>
  <form method="post" action="/session/login">
    <input type="text" name="name" placeholder="Your name" required>
    <button type="submit">Login</button>
  </form>
</div>"#
            .to_string(),
    }
}
