//! Fixed instruction sent to the provider with every image

/// Prompt describing the content and formatting rules for a description
pub const DESCRIPTION_PROMPT: &str = r#"
Analyze this image and generate a strict visual description based on these rules:

CRITICAL NEGATIVE CONSTRAINTS (DO NOT MENTION):
- Face, head, eyes, nose, mouth, ears.
- Hair, hairstyle, hair color, facial hair, beard, mustache.
- Ethnicity, skin tone of the face, age, facial expressions.
- Do NOT describe the head area at all.

CONTENT REQUIREMENTS:
- Focus ONLY on: Body posture, clothing (detailed), accessories, actions, objects, environment, lighting, atmosphere, perspective.

FORMATTING RULES:
1. Start EXACTLY with the subject and the literal text "(image reference)".
   Example: "a man "(image reference)" standing..." or "a woman "(image reference)" sitting..." or "a red car "(image reference)" parked..."
2. Do NOT use opening phrases like "This image shows" or "A photo of".
3. Output must be a SINGLE continuous paragraph.
4. English only.
5. Tone: Neutral, descriptive, factual. No opinions or storytelling.

Generate the description now complying with all points above.
"#;
