/// A representative tutoring answer with LaTeX-style math markup, the way
/// the assistant actually writes it.
pub fn math_fixture() -> &'static str {
    return r#"
Great question! Let's check whether the series converges.

$$s = \sum_{n=1}^{\infty} \frac{1}{n^2}$$

Each term satisfies \frac{1}{n^2} \leq \frac{1}{n(n-1)} for n \geq 2, so the partial sums are bounded and s = \frac{\pi^2}{6} \approx 1.645.

Since \pi \in \mathbb{R} and the bound holds \forall n \in \mathbb{N}, we write s \rightarrow \frac{\pi^2}{6}.
"#
    .trim();
}

/// The `/api/chat-history/` payload as the server actually serializes it:
/// numeric session ids, ISO timestamps, nullable materials.
pub fn chat_history_fixture() -> &'static str {
    return r#"
{
    "sessions": [
        {
            "session_id": 3,
            "created_at": "2024-01-18T09:24:11",
            "material": "materials/algebra-notes.pdf",
            "messages": [
                {"type": "user", "text": "What is a derivative?"},
                {"type": "assistant", "text": "A derivative measures how a function changes as its input changes."}
            ]
        },
        {
            "session_id": 8,
            "created_at": "2024-01-19T17:02:45",
            "material": null,
            "messages": [
                {"type": "user", "text": "Explain the unit circle"},
                {"type": "assistant", "text": "The unit circle has radius 1 and is centered at the origin."}
            ]
        }
    ]
}
"#
    .trim();
}
