//! Fixed content tables, one canonical table per concept

use mood_diary_core::MoodLabel;

const POSITIVE_QUOTES: &[&str] = &[
    "You're doing amazing, sweetie! 💪🌟",
    "Smiles are contagious—pass one on! ✨😊💛",
    "Happiness is homemade.🏡🌸🍪",
    "Today is a good day for a good day.🌞🌼🎈",
    "Sunshine mixed with a little bit of magic.☀️🧚‍♀️🍃",
    "Joy is not in things; it is in us. 💖🌷🌈",
    "Your smile can light up a whole galaxy! ✨💖",
    "Keep going, you're on fire! 🔥🚀",
];

const NEUTRAL_QUOTES: &[&str] = &[
    "Take a deep breath, you're exactly where you need to be. 🌿",
    "Not every moment needs a meaning. Just be. 🌙",
    "Life is in the little pauses. ☕📖",
    "One step at a time.🐾🕰️🌿",
    "This too shall pass. ⏳🍂🌤️",
    "Not every day needs fireworks.🕊️📖🕯️",
    "Breathe. Just be. 🌬️🪷🧘‍♀️",
    "Stillness speaks volumes.🌌🌙📦",
];

const NEGATIVE_QUOTES: &[&str] = &[
    "Even the moon goes through phases. You'll shine again. 🌑🌕",
    "It's okay to cry. You're still strong. 🤍🌧️",
    "You matter more than you know. 💌",
    "It's okay to not be okay. 🌧️🫂💙",
    "Tears are words the heart can't say. 💧🖤📖",
    "Healing is messy, but it’s worth it. 🩹🌱🕊️",
    "You grow through what you go through. 🌾🛤️🌧️",
];

const POSITIVE_SUGGESTIONS: &[&str] = &[
    "Celebrate your wins, even the small ones! 🎉",
    "Share your joy with someone you love. 🥰",
    "Use this energy to start something new! ✨",
    "Dance like nobody's watching 💃🎶",
    "Capture the moment with photos 📸🌸",
    "Call or hug someone you love 🤗📞",
    "Bake something sweet 🍪🧁",
    "Make a gratitude list ✨📝",
    "Spread kindness—compliment a stranger or do a good deed 💌🌼",
    "Create art, journal, or start a DIY project 🎨✂️",
];

const NEUTRAL_SUGGESTIONS: &[&str] = &[
    "Go for a mindful walk and just observe 🍃",
    "Journal what you’re feeling—it might surprise you 🖋️",
    "Listen to soft music and just be 🎧",
    "Declutter a small space around you 🧹📦",
    "Make a cup of tea or coffee ☕🍵",
    "Do a simple meditation or breathing exercise 🧘‍♀️🌬️",
    "Try out a new playlist or podcast 🎙️🎶",
    "Go on a casual stroll—no destination needed 🚶‍♀️🌆",
    "Sketch, doodle, or write freely 🎨✍️",
    "Just sit and be—no pressure, no expectations 🌌🕯️",
];

const NEGATIVE_SUGGESTIONS: &[&str] = &[
    "Talk to someone you trust 🤝",
    "Do one small thing you enjoy—just one 🌸",
    "Wrap yourself in a cozy blanket and rest. You deserve it 🫂",
    "Listen to calm music or your favorite comforting playlist 🎧🫂",
    "Journal your thoughts—let it all out 🖊️📖",
    "Cry if you need to, it’s healing 💧",
    "Take a walk in nature, even just a short one 🌿🍃",
    "Watch a feel-good movie or series 🍿💫",
    "Talk to a friend or write them a message ☎️💬",
];

pub const SUPPORTIVE_MESSAGES: &[&str] = &[
    "You're doing better than you think. 🌱",
    "It’s okay to feel this way — be gentle with yourself.🤗🫂",
    "Progress isn’t always visible, but it’s still progress.😮‍💨",
    "You don’t have to figure it all out right now.😌",
    "Breathe. Let it go—just for now.😮‍💨",
    "One step at a time is enough.👍🏻",
    "Your thoughts are not always the truth.✌🏻",
    "You’ve handled hard things before—you can do it again.💪🏻",
    "Progress, not perfection.🧑🏻‍🦯",
    "It’s okay to pause. It’s okay to rest.🌷🍃",
    "You are safe right now. The rest can wait.🍂",
    "Trust yourself—you’ve got this.😌✌🏻",
    "Overthinking is the art of creating problems that weren’t even there.🙂‍↕️🙂‍↔️",
    "Don’t believe everything you think.💫",
    "Worrying means you suffer twice.✨",
    "Let go or be dragged.🙂",
    "You can’t control everything. Sometimes you just need to relax and have faith.😇",
    "Feelings are visitors. Let them come and go.😉",
    "Overthinking ruins moods. Breathe and let it be.😮‍💨😌",
];

pub const REFLECTION_PROMPTS: &[&str] = &[
    "What are three things that went okay today?",
    "What would I tell a friend feeling this way?",
    "What's something I'm proud of this week?",
    "What if everything works out better than I imagined?",
    "What’s one small thing I can do to feel more in control?",
    "What if I trusted myself a little more today?",
    "What is this moment trying to teach me?",
    "How can I let go of what I can’t control and focus on what I can?",
    "What’s the best possible outcome I can imagine from this situation?",
    "What am I grateful for right now that’s going well?",
    "Is this thought helpful or just a habit?",
    "What’s one thing I’ve handled well recently?",
    "Who do I want to be in this moment—calm, patient, or confident?",
    "How can I simplify this situation in my mind?",
    "What’s one reason I believe in myself in this situation?",
];

const POSITIVE_PLAYLISTS: &[&str] = &[
    "https://open.spotify.com/embed/playlist/37i9dQZF1DX3rxVfibe1L0",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DXdPec7aLTmlC",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DX1BzILRveYHb",
];

const NEUTRAL_PLAYLISTS: &[&str] = &[
    "https://open.spotify.com/embed/playlist/37i9dQZF1DWVV27DiNWxkR",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DWU4xkXxbaU3V",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DXcCnTAt8CfNe",
];

const NEGATIVE_PLAYLISTS: &[&str] = &[
    "https://open.spotify.com/embed/playlist/37i9dQZF1DX3YSRoSdA634",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DX7qK8ma5wgG1",
    "https://open.spotify.com/embed/playlist/37i9dQZF1DWXRqgorJj26U",
];

pub fn quotes(label: MoodLabel) -> &'static [&'static str] {
    match label {
        MoodLabel::Positive => POSITIVE_QUOTES,
        MoodLabel::Neutral => NEUTRAL_QUOTES,
        MoodLabel::Negative => NEGATIVE_QUOTES,
    }
}

pub fn suggestions(label: MoodLabel) -> &'static [&'static str] {
    match label {
        MoodLabel::Positive => POSITIVE_SUGGESTIONS,
        MoodLabel::Neutral => NEUTRAL_SUGGESTIONS,
        MoodLabel::Negative => NEGATIVE_SUGGESTIONS,
    }
}

pub fn playlists(label: MoodLabel) -> &'static [&'static str] {
    match label {
        MoodLabel::Positive => POSITIVE_PLAYLISTS,
        MoodLabel::Neutral => NEUTRAL_PLAYLISTS,
        MoodLabel::Negative => NEGATIVE_PLAYLISTS,
    }
}
