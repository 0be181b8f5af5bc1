//! The 256 frozen base English words, one per icon index.
//!
//! Numbering is part of the compatibility contract: index 15 is "dog"
//! in every implementation, forever. Do not reorder.

/// Base English word for each icon index 0-255.
pub const BASE_WORDS: [&str; 256] = [
    "eye", "ear", "nose", "mouth", "tongue", "bone", "tooth", "skull",
    "heart", "brain", "baby", "foot", "muscle", "hand", "leg", "dog",
    "cat", "horse", "cow", "pig", "goat", "rabbit", "mouse", "tiger",
    "wolf", "bear", "deer", "elephant", "bat", "camel", "zebra", "giraffe",
    "fox", "lion", "monkey", "panda", "llama", "squirrel", "chicken", "bird",
    "duck", "penguin", "peacock", "owl", "eagle", "snake", "frog", "turtle",
    "crocodile", "lizard", "fish", "octopus", "crab", "whale", "dolphin", "shark",
    "snail", "ant", "bee", "butterfly", "worm", "spider", "scorpion", "sun",
    "moon", "star", "earth", "fire", "water", "snow", "cloud", "rain",
    "rainbow", "wind", "thunder", "volcano", "tornado", "comet", "wave", "desert",
    "island", "mountain", "rock", "diamond", "feather", "tree", "cactus", "flower",
    "leaf", "mushroom", "wood", "mango", "apple", "banana", "grape", "orange",
    "melon", "peach", "strawberry", "pineapple", "cherry", "lemon", "coconut", "cucumber",
    "seed", "corn", "carrot", "onion", "potato", "pepper", "tomato", "garlic",
    "peanut", "bread", "cheese", "egg", "meat", "rice", "cake", "snack",
    "sweet", "honey", "milk", "coffee", "tea", "wine", "beer", "juice",
    "salt", "fork", "spoon", "bowl", "knife", "bottle", "soup", "pan",
    "key", "lock", "bell", "hammer", "axe", "gear", "magnet", "sword",
    "bow", "shield", "bomb", "compass", "hook", "thread", "needle", "scissors",
    "pencil", "house", "castle", "temple", "bridge", "factory", "door", "window",
    "tent", "beach", "bank", "tower", "statue", "wheel", "boat", "train",
    "car", "bike", "plane", "rocket", "helicopter", "ambulance", "fuel", "track",
    "map", "drum", "guitar", "violin", "piano", "paint", "book", "music",
    "mask", "camera", "microphone", "headset", "movie", "dress", "coat", "pants",
    "glove", "shirt", "shoes", "hat", "flag", "cross", "circle", "triangle",
    "square", "check", "alert", "sleep", "magic", "message", "blood", "repeat",
    "dna", "germ", "pill", "doctor", "microscope", "galaxy", "flask", "atom",
    "satellite", "battery", "telescope", "tv", "radio", "phone", "bulb", "keyboard",
    "chair", "bed", "candle", "mirror", "ladder", "basket", "vase", "shower",
    "razor", "soap", "computer", "trash", "umbrella", "money", "prayer", "toy",
    "crown", "ring", "dice", "piece", "coin", "calendar", "boxing", "swimming",
    "game", "soccer", "ghost", "alien", "robot", "angel", "dragon", "clock",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_positions() {
        assert_eq!(BASE_WORDS[15], "dog");
        assert_eq!(BASE_WORDS[63], "sun");
        assert_eq!(BASE_WORDS[136], "key");
        assert_eq!(BASE_WORDS[255], "clock");
    }

    #[test]
    fn test_all_unique() {
        let mut seen = std::collections::HashSet::new();
        for w in BASE_WORDS {
            assert!(seen.insert(w), "duplicate base word: {w}");
        }
    }
}
