//! Server index page
//!
//! Guests get a read-only table; admins additionally get a filter box and
//! add/edit/delete controls that call the JSON endpoints. Admin ping and
//! telnet results are shown inline instead of on a separate JSON page.

use kernel::AuthContext;
use platform::html::{document, escape};

use crate::domain::entities::ServerRecord;

pub fn index_page(servers: &[ServerRecord], auth: &AuthContext) -> String {
    let admin = auth.username();

    let nav = match admin {
        Some(name) => format!(
            r#"<nav>Signed in as <strong>{}</strong><a href="/logout">Log out</a></nav>"#,
            escape(name)
        ),
        None => r#"<nav><a href="/login">Admin login</a></nav>"#.to_string(),
    };

    let rows: String = if servers.is_empty() {
        r#"<tr><td colspan="5">No servers yet.</td></tr>"#.to_string()
    } else {
        servers.iter().map(|s| server_row(s, admin.is_some())).collect()
    };

    let (filter, admin_panel) = if admin.is_some() {
        (FILTER_BOX, ADMIN_PANEL)
    } else {
        ("", "")
    };

    let body = format!(
        r#"<div class="card">
    {nav}
    <h1>Servers</h1>
    {filter}
    <table>
        <thead><tr><th>ID</th><th>IP</th><th>Name</th><th>Port</th><th></th></tr></thead>
        <tbody>
{rows}
        </tbody>
    </table>
</div>
{admin_panel}"#
    );

    document("Servers", &body)
}

fn server_row(server: &ServerRecord, admin: bool) -> String {
    let ip = escape(&server.ip);
    let name = escape(&server.name);
    let controls = if admin {
        format!(
            r#" <button data-edit="{id}" data-ip="{ip}" data-name="{name}" data-port="{port}">Edit</button> <button data-delete="{id}">Delete</button>"#,
            id = server.id,
            port = server.port,
        )
    } else {
        String::new()
    };

    format!(
        r#"            <tr data-row><td>{id}</td><td>{ip}</td><td>{name}</td><td>{port}</td><td><a class="check" href="/ping/{ip}">ping</a> <a class="check" href="/telnet/{ip}/{port}">telnet</a>{controls}</td></tr>
"#,
        id = server.id,
        port = server.port,
    )
}

const FILTER_BOX: &str =
    r#"<p><input id="filter" type="search" placeholder="Filter by IP, name or port"></p>"#;

const ADMIN_PANEL: &str = r##"<div class="card">
    <h2>Add server</h2>
    <form id="add-server">
        <p><label>IP <input name="ip" required></label>
        <label>Name <input name="name" maxlength="100" required></label>
        <label>Port <input name="port" type="number" min="1" max="65535" required></label>
        <button type="submit">Add</button></p>
    </form>
    <form id="edit-server" hidden>
        <h2>Edit server <span id="edit-id"></span></h2>
        <p><label>IP <input name="ip" required></label>
        <label>Name <input name="name" maxlength="100" required></label>
        <label>Port <input name="port" type="number" min="1" max="65535" required></label>
        <button type="submit">Save</button>
        <button type="button" id="edit-cancel">Cancel</button></p>
    </form>
    <p class="error" id="form-error"></p>
    <pre id="check-result" hidden></pre>
</div>
<script>
async function send(method, url, body) {
    const res = await fetch(url, {
        method,
        headers: { "Content-Type": "application/json" },
        body: body ? JSON.stringify(body) : undefined,
    });
    if (res.ok) { location.reload(); return; }
    const data = await res.json().catch(() => ({}));
    document.getElementById("form-error").textContent = data.error || res.statusText;
}
function fields(form) {
    const f = new FormData(form);
    return { ip: f.get("ip"), name: f.get("name"), port: f.get("port") };
}
const addForm = document.getElementById("add-server");
const editForm = document.getElementById("edit-server");
addForm.addEventListener("submit", (e) => {
    e.preventDefault();
    send("POST", "/add", fields(addForm));
});
editForm.addEventListener("submit", (e) => {
    e.preventDefault();
    send("PUT", "/update/" + editForm.dataset.id, fields(editForm));
});
document.getElementById("edit-cancel").addEventListener("click", () => {
    editForm.hidden = true;
});
document.querySelectorAll("[data-edit]").forEach((b) => {
    b.addEventListener("click", () => {
        editForm.dataset.id = b.dataset.edit;
        editForm.elements.ip.value = b.dataset.ip;
        editForm.elements.name.value = b.dataset.name;
        editForm.elements.port.value = b.dataset.port;
        document.getElementById("edit-id").textContent = "#" + b.dataset.edit;
        editForm.hidden = false;
    });
});
document.querySelectorAll("[data-delete]").forEach((b) => {
    b.addEventListener("click", () => send("DELETE", "/delete/" + b.dataset.delete));
});
document.querySelectorAll("a.check").forEach((a) => {
    a.addEventListener("click", async (e) => {
        e.preventDefault();
        const out = document.getElementById("check-result");
        out.hidden = false;
        out.textContent = "Checking " + a.getAttribute("href") + " ...";
        const res = await fetch(a.getAttribute("href"));
        const data = await res.json().catch(() => ({}));
        out.textContent = data.message || data.error || res.statusText;
    });
});
document.getElementById("filter").addEventListener("input", (e) => {
    const needle = e.target.value.trim().toLowerCase();
    document.querySelectorAll("tr[data-row]").forEach((row) => {
        row.hidden = needle !== "" && !row.textContent.toLowerCase().includes(needle);
    });
});
</script>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServerId;

    fn record(name: &str) -> ServerRecord {
        ServerRecord {
            id: ServerId(1),
            ip: "10.0.0.1".to_string(),
            name: name.to_string(),
            port: 22,
        }
    }

    #[test]
    fn test_guest_view_is_read_only() {
        let page = index_page(&[record("web")], &AuthContext::Anonymous);
        assert!(page.contains("<td>web</td>"));
        assert!(page.contains(r#"href="/login""#));
        assert!(page.contains(r#"href="/ping/10.0.0.1""#));
        assert!(!page.contains("add-server"));
        assert!(!page.contains("edit-server"));
        assert!(!page.contains("data-delete"));
        assert!(!page.contains("data-edit"));
        assert!(!page.contains(r#"id="filter""#));
    }

    #[test]
    fn test_admin_view_has_controls() {
        let page = index_page(&[record("web")], &AuthContext::admin("admin"));
        assert!(page.contains("Signed in as <strong>admin</strong>"));
        assert!(page.contains(r#"data-delete="1""#));
        assert!(page.contains(r#"id="add-server""#));
        assert!(page.contains(r#"id="filter""#));
        assert!(page.contains(r#"id="check-result""#));
    }

    #[test]
    fn test_admin_rows_carry_edit_values() {
        let page = index_page(&[record("web")], &AuthContext::admin("admin"));
        assert!(page.contains(
            r#"data-edit="1" data-ip="10.0.0.1" data-name="web" data-port="22""#
        ));
        assert!(page.contains(r#"id="edit-server""#));
        assert!(page.contains(r#"send("PUT", "/update/" + editForm.dataset.id"#));
    }

    #[test]
    fn test_names_are_escaped() {
        let page = index_page(&[record("<script>x</script>")], &AuthContext::Anonymous);
        assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!page.contains("<script>x</script>"));
    }

    #[test]
    fn test_edit_attributes_are_escaped() {
        let page = index_page(&[record(r#"a" onclick="x"#)], &AuthContext::admin("admin"));
        assert!(page.contains(r#"data-name="a&quot; onclick=&quot;x""#));
        assert!(!page.contains(r#"data-name="a" onclick"#));
    }
}
