//! Inline HTML pages: landing, login, home.
//!
//! The login form performs no credential verification; any non-empty email
//! and password pair is accepted. This surface exists for completeness only.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{routing::get, Form, Router};
use serde::Deserialize;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/login", get(login_page).post(login_submit))
        .route("/home", get(home))
}

async fn landing() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Docchat - Ask Your Documents</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    a.button { display: inline-block; margin-top: 1rem; padding: 0.6rem 1rem;
               background: #0071e3; color: #fff; text-decoration: none; border-radius: 6px; }
  </style>
</head>
<body>
  <h1>Docchat</h1>
  <p>Upload a PDF or DOCX document, then ask questions about its content.</p>
  <a class="button" href="/login">Log in</a>
</body>
</html>"#,
    )
}

async fn login_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Docchat - Login</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    form { max-width: 320px; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input { width: 100%; padding: 0.5rem; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
  </style>
</head>
<body>
  <h1>Log in</h1>
  <form method="post" action="/login">
    <label for="email">Email</label>
    <input id="email" name="email" type="email" />
    <label for="password">Password</label>
    <input id="password" name="password" type="password" />
    <button type="submit">Continue</button>
  </form>
</body>
</html>"#,
    )
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn login_submit(Form(form): Form<LoginForm>) -> Response {
    if form.email.is_empty() || form.password.is_empty() {
        return (StatusCode::BAD_REQUEST, "Please fill in both fields.").into_response();
    }

    info!(email = %form.email, "Login accepted");
    Redirect::to("/home").into_response()
}

async fn home() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Docchat - Home</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    input, textarea { width: 100%; padding: 0.5rem; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    .message { padding: 0.5rem 0; }
    .message.user { font-weight: 600; }
    #chatMessages { max-height: 320px; overflow: auto; }
  </style>
</head>
<body>
  <h1>Docchat</h1>

  <div class="card">
    <h2>1) Upload a document</h2>
    <input id="fileInput" type="file" accept=".pdf,.docx" />
    <button id="uploadBtn">Upload</button>
    <div id="uploadStatus"></div>
  </div>

  <div class="card">
    <h2>2) Ask a question</h2>
    <div id="chatMessages"></div>
    <input id="questionInput" placeholder="Ask something about the document" />
    <button id="sendQuestion">Ask</button>
  </div>

  <script>
    const uploadBtn = document.getElementById('uploadBtn');
    const uploadStatus = document.getElementById('uploadStatus');
    const chatMessages = document.getElementById('chatMessages');
    const questionInput = document.getElementById('questionInput');

    uploadBtn.addEventListener('click', async () => {
      const fileInput = document.getElementById('fileInput');
      if (!fileInput.files.length) {
        uploadStatus.textContent = 'Select a file first.';
        return;
      }
      const formData = new FormData();
      formData.append('file', fileInput.files[0]);
      uploadStatus.textContent = 'Uploading...';
      const res = await fetch('/upload', { method: 'POST', body: formData });
      const json = await res.json();
      uploadStatus.textContent = json.message || json.error || 'Upload failed.';
    });

    document.getElementById('sendQuestion').addEventListener('click', async () => {
      const question = questionInput.value.trim();
      if (!question) return;

      const userMessage = document.createElement('div');
      userMessage.className = 'message user';
      userMessage.textContent = question;
      chatMessages.appendChild(userMessage);

      const res = await fetch('/ask', {
        method: 'POST',
        headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
        body: `question=${encodeURIComponent(question)}`
      });
      const json = await res.json();

      const botMessage = document.createElement('div');
      botMessage.className = 'message bot';
      botMessage.textContent = json.answer || json.error || 'No answer.';
      chatMessages.appendChild(botMessage);
      chatMessages.scrollTop = chatMessages.scrollHeight;
      questionInput.value = '';
    });
  </script>
</body>
</html>"#,
    )
}
