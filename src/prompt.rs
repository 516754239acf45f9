//! Compiled-in request content.
//!
//! Both strings are literal data: the instruction is sent verbatim as the system message,
//! and the journal entry is only used when the caller does not supply one.

/// Instruction sent as the `system` message of every analysis request.
pub const SYSTEM_PROMPT: &str = "Perform a detailed sentiment analysis of the following personal journal entry. The analysis should include:\n\n\
Overall sentiment score (positive, neutral, negative).\n\
Key phrases contributing to the sentiment, categorized as positive or negative.\n\
Sentiment intensity (mild, moderate, strong).\n\
Specific emotions detected (e.g., joy, sadness, anger, surprise).\n\
Suggestions for improving the mood based on the analysis.\n\
Journal Entry: '[Insert journal entry here]'\n\n\
Example Input: 'Today was a rollercoaster of emotions. I felt incredibly happy in the morning when I got a surprise call from an old friend. However, the afternoon was stressful due to a tight deadline at work. By evening, I was exhausted but relieved to have completed my tasks.'\n\n\
Example Output:\n\n\
Overall Sentiment: Mixed (positive with mild negative aspects)\n\
Positive Key Phrases: \"incredibly happy,\" \"surprise call from an old friend,\" \"relieved to have completed my tasks\"\n\
Negative Key Phrases: \"stressful due to a tight deadline,\" \"exhausted\"\n\
Sentiment Intensity: Moderate\n\
Detected Emotions: Joy (morning), Stress and Exhaustion (afternoon and evening)\n\
Mood Improvement Suggestions: Consider setting more realistic deadlines or seeking support during high-stress periods. Reflect on the positive moments of the day to end on a happier note.\"\n\
Use this structure to provide a comprehensive analysis of the journal entry.\n\n\
new line for each attribute\n";

/// Journal entry analysed when none is given on the command line.
pub const DEFAULT_JOURNAL_ENTRY: &str = "Today was quite overwhelming. I woke up feeling tired and unmotivated, despite getting a full night's sleep. The day started with a series of back-to-back meetings, leaving me no time to focus on my tasks. I felt frustrated and under pressure. However, in the evening, I went for a walk in the park, which helped clear my mind. The fresh air and the sound of birds chirping lifted my spirits a bit. Although the day was tough, I am grateful for the peaceful walk that ended it on a slightly better note";
