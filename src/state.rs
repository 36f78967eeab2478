pub struct AppState {
	/// Key every request must present. `None` accepts any well-formed key.
	pub api_key: Option<String>,
}

impl AppState {
	pub fn new(api_key: Option<String>) -> Self {
		Self {
			api_key: api_key.filter(|k| !k.is_empty()),
		}
	}
}
