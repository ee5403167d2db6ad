//! Login page

use platform::html::{document, escape};

/// Render the login form, optionally with an error and the previously
/// entered username.
pub fn login_page(error: Option<&str>, username: &str, signed_in_as: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();

    let status_html = signed_in_as
        .map(|name| {
            format!(
                r#"<p>Signed in as <strong>{}</strong>. <a href="/logout">Log out</a></p>"#,
                escape(name)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<div class="card">
    <h1>Admin login</h1>
    {status_html}
    {error_html}
    <form method="post" action="/login">
        <p><label>Username <input type="text" name="username" value="{username}" autocomplete="username"></label></p>
        <p><label>Password <input type="password" name="password" autocomplete="current-password"></label></p>
        <p><button type="submit">Log in</button> <a href="/">Back to servers</a></p>
    </form>
</div>"#,
        username = escape(username),
    );

    document("Admin login", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_username_are_escaped() {
        let page = login_page(Some("Invalid credentials"), "<b>admin</b>", None);
        assert!(page.contains(r#"<p class="error">Invalid credentials</p>"#));
        assert!(page.contains("&lt;b&gt;admin&lt;/b&gt;"));
        assert!(!page.contains("<b>admin</b>"));
    }

    #[test]
    fn test_plain_form() {
        let page = login_page(None, "", None);
        assert!(page.contains(r#"action="/login""#));
        assert!(!page.contains("class=\"error\""));
        assert!(!page.contains("Signed in as"));
    }
}
