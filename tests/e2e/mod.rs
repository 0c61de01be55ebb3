// End-to-end tests for the TTS proxy
//
// Each test starts two servers on ephemeral ports:
// - a mock synthesis provider (axum) that records every request it receives
// - the proxy itself, wired exactly as `main` wires it, pointed at the mock
//
// Requests go through a real hyper client, so CORS headers, status mapping and
// the outbound wire format (query key, Content-Length, JSON body) are all
// checked end to end.

mod test_cors;
mod test_health;
