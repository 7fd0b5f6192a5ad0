use axum::response::Html;

/// GET / - Welcome page linking to the employee list.
pub async fn welcome() -> Html<&'static str> {
    Html(
        r#"<h1>DATABASE</h1>
<p>Click <a href="/employees">here</a> to view Database</p>"#,
    )
}
