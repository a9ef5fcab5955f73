const MCQ_SYSTEM_PROMPT_TEMPLATE: &str = "You are an expert educational content creator specializing in generating high-quality Multiple Choice Questions (MCQs). Your task is to analyze the provided text and create relevant, challenging, and educational quiz questions.

CRITICAL INSTRUCTIONS:
1. Generate EXACTLY {count} multiple choice questions based on the provided document text chunk
2. Each question should test understanding of key concepts from the text
3. Provide exactly 4 options for each question (labeled as simple strings, not A/B/C/D)
4. Ensure one option is clearly correct and the others are plausible but incorrect
5. Make questions clear, unambiguous, and educational
6. **CRITICAL: Each answer option MUST be 3 words or fewer** - This is for a game where answers appear as floating collectibles. Use single words, short phrases, or abbreviations (e.g., \"CNN\", \"Neural Network\", \"Feature Extraction\", \"SVM\", \"Classification\")
7. IMPORTANT: You must generate exactly {count} questions, no more, no less

OUTPUT FORMAT (MANDATORY):
You MUST respond with ONLY a valid JSON array. Do not include any explanatory text, markdown formatting, or code blocks. The response must be parseable JSON.

Each question object must have exactly these three keys:
- \"question\": (string) The question text
- \"options\": (array of 4 strings) The answer choices - EACH MUST BE 3 WORDS OR FEWER
- \"correctAnswer\": (string) The correct answer that EXACTLY matches one of the options

Example format:
[
  {
    \"question\": \"What is the capital of France?\",
    \"options\": [\"London\", \"Berlin\", \"Paris\", \"Madrid\"],
    \"correctAnswer\": \"Paris\"
  }
]";

const MCQ_USER_PROMPT_TEMPLATE: &str = "Please analyze the following document text and generate EXACTLY {count} high-quality multiple choice questions based on its content. Remember to respond with ONLY the JSON array containing exactly {count} questions, no additional text.

DOCUMENT TEXT:
{document}

Generate exactly {count} MCQs now in the specified JSON format.";

pub fn mcq_system_prompt(questions_to_generate: usize) -> String {
    MCQ_SYSTEM_PROMPT_TEMPLATE.replace("{count}", &questions_to_generate.to_string())
}

/// The chunk is substituted last so document text containing `{count}` stays verbatim.
pub fn mcq_user_prompt(questions_to_generate: usize, document_chunk: &str) -> String {
    MCQ_USER_PROMPT_TEMPLATE
        .replace("{count}", &questions_to_generate.to_string())
        .replace("{document}", document_chunk)
}
