//! Global CSS styles for SnapSimp.
//!
//! Dark chat palette with Snapchat-blue accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --primary: #33a9dc;
  --secondary: #66bee5;
  --error: #df5553;

  /* Surfaces */
  --page-bg: #151515;
  --navbar-bg: #202020;
  --chat-bg: #1c1c1e;
  --chat-header-bg: #303030;
  --logo-bg: #0f0f0f;

  /* Bubbles */
  --bubble-sent: #0a74da;
  --bubble-received: #2c2c2e;

  /* Text */
  --text-primary: #f0f0f0;
  --text-dark: #0f0f0f;
  --text-muted: rgba(240, 240, 240, 0.6);

  /* Typography */
  --font-display: 'Teko', 'Oswald', 'Impact', sans-serif;
  --font-heading: 'Oswald', 'Arial Narrow', sans-serif;
  --font-body: 'Roboto', 'Helvetica Neue', Arial, sans-serif;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
  scroll-behavior: smooth;
}

a {
  color: inherit;
  text-decoration: none;
}

body {
  font-family: var(--font-body);
  background: var(--page-bg);
  color: var(--text-primary);
  overflow: hidden;
}

/* === Page Shell === */
.page {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
  background: var(--page-bg);
}

.page-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
  flex: 1;
  overflow-y: auto;
}

.page-content--chat {
  align-items: stretch;
}

.page-content::-webkit-scrollbar,
.conversation-messages::-webkit-scrollbar {
  width: 8px;
}

.page-content::-webkit-scrollbar-thumb,
.conversation-messages::-webkit-scrollbar-thumb {
  background-color: var(--text-primary);
  border-radius: 4px;
}

.page-content::-webkit-scrollbar-track,
.conversation-messages::-webkit-scrollbar-track {
  background-color: transparent;
}

/* === Navigation Bar === */
.navbar {
  display: flex;
  flex-direction: row;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  background: var(--navbar-bg);
  flex-shrink: 0;
}

.navbar--large {
  height: 90px;
}

.navbar--compact {
  height: 70px;
}

.navbar-side {
  flex: 1;
  padding: 0 10px;
  display: flex;
  align-items: center;
}

.navbar-links {
  justify-content: flex-end;
  gap: 16px;
}

.navbar-logo {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--logo-bg);
  padding: 10px;
  border-radius: 12px;
  user-select: none;
  aspect-ratio: 1;
  width: 100%;
}

.navbar-logo-mark {
  font-family: var(--font-display);
  font-weight: bold;
  color: var(--primary);
  font-size: 2rem;
  line-height: 1;
}

.navbar-title {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-primary);
  font-family: var(--font-display);
  font-weight: bold;
  user-select: none;
}

.navbar--large .navbar-title {
  font-size: 58px;
}

.navbar--compact .navbar-title {
  font-size: 40px;
}

.nav-link {
  font-family: var(--font-heading);
  font-size: 18px;
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

/* === Separator === */
.separator {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.separator-text {
  color: var(--text-primary);
  font-size: 22px;
  font-weight: bold;
  font-family: var(--font-heading);
}

.separator-rule {
  height: 3px;
  border-radius: 3px;
  background-color: var(--text-primary);
}

/* === Choose File Row === */
.choose-file-row {
  display: flex;
  flex-direction: row;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 20px;
  padding: 10px;
}

.choose-file-btn {
  background: var(--primary);
  color: var(--text-dark);
  border: none;
  border-radius: 4px;
  padding: 6px 16px;
  font-size: 16px;
  font-weight: bold;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.choose-file-btn:hover {
  background: var(--secondary);
}

.choose-file-btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.choose-file-label {
  font-family: var(--font-heading);
  font-size: 18px;
  font-weight: bold;
  text-align: center;
  user-select: none;
  color: var(--text-muted);
}

.choose-file-label.chosen {
  color: var(--text-primary);
}

.choose-file-clear {
  display: flex;
  align-items: center;
  justify-content: center;
  background: transparent;
  border: none;
  border-radius: 50%;
  padding: 8px;
  color: var(--text-primary);
  cursor: pointer;
}

.choose-file-clear:hover {
  background: rgba(240, 240, 240, 0.1);
}

.choose-file-error {
  flex-basis: 100%;
  text-align: center;
  color: var(--error);
  font-size: 14px;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal {
  background: #ffffff;
  color: #1f1f1f;
  border-radius: 6px;
  max-width: 480px;
  width: 90%;
  padding: 16px 24px;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.5);
}

.modal-title {
  font-size: 20px;
  font-weight: 500;
  margin-bottom: 12px;
}

.modal-body {
  font-size: 16px;
  margin-bottom: 16px;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 8px;
}

.btn {
  border: none;
  border-radius: 4px;
  padding: 6px 16px;
  font-weight: bold;
  cursor: pointer;
  color: #ffffff;
}

.btn-primary {
  background: var(--primary);
}

.btn-danger {
  background: var(--error);
}

/* === Conversation === */
.conversation-view {
  display: flex;
  flex-direction: column;
  background-color: var(--chat-bg);
  flex: 1;
  min-height: 0;
}

.conversation-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 80px;
  padding-bottom: 10px;
  background-color: var(--chat-header-bg);
  flex-shrink: 0;
}

.conversation-contact-name {
  color: var(--text-primary);
  font-family: var(--font-heading);
  font-size: 36px;
  font-weight: normal;
}

.conversation-meta {
  color: var(--text-muted);
  font-size: 12px;
}

.conversation-messages {
  flex: 1;
  overflow-y: scroll;
  padding: 10px;
}

.conversation-empty {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  color: var(--text-muted);
}

/* === Message Bubbles === */
.message-row {
  display: flex;
  padding: 2px 0;
}

.message-row-sent {
  justify-content: flex-end;
}

.message-row-received {
  justify-content: flex-start;
}

.message-bubble {
  padding: 10px;
  border-radius: 14px;
  max-width: 75%;
  color: #ffffff;
  white-space: pre-wrap;
  word-break: break-word;
}

.message-bubble-sent {
  background-color: var(--bubble-sent);
}

.message-bubble-received {
  background-color: var(--bubble-received);
}

.message-bubble-media {
  font-style: italic;
  opacity: 0.85;
}

.message-bubble-time {
  display: block;
  margin-top: 5px;
  font-size: 12px;
  opacity: 0.8;
}

/* === Region Errors === */
.region-error {
  margin: 40px auto;
  max-width: 520px;
  padding: 20px;
  border: 1px solid var(--error);
  border-radius: 8px;
  text-align: center;
}

.region-error-title {
  color: var(--error);
  font-family: var(--font-heading);
  font-size: 22px;
  margin-bottom: 8px;
}

.region-error-detail {
  color: var(--text-primary);
  font-family: monospace;
  word-break: break-all;
  margin-bottom: 8px;
}

.region-error-hint {
  color: var(--text-muted);
  font-size: 14px;
}
"#;
