//! Compiled-in vocabulary used to label cells.

/// Lower-case words without repeats, long enough to populate every
/// difficulty bucket for the supported grid sizes.
pub const WORD_LIST: &[&str] = &[
    "ace", "act", "add", "age", "ago", "aid", "aim", "air", "ale", "all", "amp", "and", "ant",
    "any", "ape", "apt", "arc", "ark", "arm", "art", "ash", "ask", "asp", "ate", "awe", "axe",
    "bad", "bag", "ban", "bar", "bat", "bay", "bed", "bee", "beg", "bet", "bib", "bid", "big",
    "bin", "bit", "boa", "bog", "bow", "box", "boy", "bud", "bug", "bun", "bus", "but", "buy",
    "cab", "cad", "cam", "can", "cap", "car", "cat", "cob", "cod", "cog", "cot", "cow", "coy",
    "cry", "cub", "cud", "cup", "cur", "cut", "dab", "dam", "day", "den", "dew", "did", "dig",
    "dim", "din", "dip", "doe", "dog", "dot", "dry", "dub", "dud", "due", "dug", "dye", "ear",
    "eat", "ebb", "eel", "egg", "ego", "elf", "elk", "elm", "emu", "end", "era", "eve", "ewe",
    "eye", "fad", "fan", "far", "fat", "fax", "fed", "fee", "fen", "few", "fig", "fin", "fir",
    "fit", "fix", "fly", "foe", "fog", "fox", "fry", "fun", "fur", "gag", "gap", "gas", "gel",
    "gem", "get", "gig", "gin", "gnu", "god", "got", "gum", "gut", "guy", "gym", "had", "ham",
    "has", "hat", "hay", "hem", "hen", "her", "hew", "hid", "him", "hip", "his", "hit", "hob",
    "hog", "hop", "hot", "how", "hub", "hue", "hug", "hum", "hut", "ice", "icy", "ill", "imp",
    "ink", "inn", "ion", "ire", "irk", "ivy", "jab", "jam", "jar", "jaw", "jay", "jet", "jig",
    "job", "jog", "jot", "joy", "jug", "jut", "keg", "ken", "key", "kid", "kin", "kit", "lab",
    "lad", "lag", "lap", "law", "lay", "lea", "led", "leg", "let", "lid", "lie", "lip", "lit",
    "log", "lot", "low", "lug", "mad", "man", "map", "mar", "mat", "maw", "may", "men", "met",
    "mix", "mob", "mop", "mow", "mud", "mug", "nab", "nag", "nap", "net", "new", "nib", "nil",
    "nip", "nod", "nor", "not", "now", "nun", "nut", "oak", "oar", "oat", "odd", "ode", "off",
    "oft", "oil", "old", "one", "opt", "orb", "ore", "our", "out", "owl", "own", "pad", "pal",
    "pan", "par", "pat", "paw", "pay", "pea", "peg", "pen", "pep", "pet", "pew", "pie", "pig",
    "pin", "pit", "ply", "pod", "pop", "pot", "pry", "pub", "pug", "pun", "pup", "put", "rag",
    "ram", "ran", "rap", "rat", "raw", "ray", "red", "rib", "rid", "rig", "rim", "rip", "rob",
    "rod", "roe", "rot", "row", "rub", "rug", "rum", "run", "rut", "rye", "sad", "sag", "sap",
    "sat", "saw", "say", "sea", "see", "set", "sew", "shy", "sip", "sir", "sit", "six", "ski",
    "sky", "sly", "sob", "sod", "son", "sow", "soy", "spa", "spy", "sty", "sub", "sum", "sun",
    "tab", "tag", "tan", "tap", "tar", "tax", "tea", "ten", "tie", "tin", "tip", "toe", "ton",
    "top", "tow", "toy", "try", "tub", "tug", "two", "urn", "use", "van", "vat", "vet", "vex",
    "via", "vow", "wad", "wag", "war", "was", "wax", "way", "web", "wed", "wet", "who", "why",
    "wig", "win", "wit", "woe", "wok", "won", "woo", "wow", "yak", "yam", "yap", "yaw", "yes",
    "yet", "yew", "yon", "zap", "zen", "zip", "zoo", "able", "acid", "aged", "also", "arch",
    "area", "army", "aunt", "away", "axis", "baby", "back", "bake", "bald", "ball", "band", "bank",
    "barn", "base", "bath", "bead", "beam", "bean", "bear", "beat", "bell", "belt", "bend", "best",
    "bird", "bite", "blue", "boat", "body", "bold", "bolt", "bone", "book", "boot", "born", "boss",
    "bowl", "brag", "brim", "bulb", "bull", "burn", "bush", "busy", "cage", "cake", "calf", "calm",
    "camp", "cane", "card", "care", "cart", "case", "cash", "cast", "cave", "cell", "chef", "chin",
    "chip", "city", "clam", "clay", "clip", "club", "coal", "coat", "code", "coin", "cold", "comb",
    "cone", "cook", "cool", "cope", "cord", "core", "cork", "corn", "crab", "crew", "crop", "crow",
    "cube", "cure", "curl", "dare", "dark", "dart", "dawn", "deal", "dear", "deck", "deer", "desk",
    "dial", "dice", "dirt", "dish", "dive", "dock", "dome", "door", "dose", "dove", "down", "drag",
    "draw", "drip", "drop", "drum", "duck", "dune", "dusk", "dust", "duty", "each", "earn", "ease",
    "east", "echo", "edge", "envy", "epic", "exit", "face", "fact", "fade", "fair", "fall", "fame",
    "farm", "fast", "fawn", "fear", "feat", "feed", "fern", "film", "fire", "firm", "fish", "fist",
    "flag", "flame", "flask", "fleet", "flint", "flock", "flood", "floor", "flour", "fluid",
    "flute", "focus", "forge", "forty", "frame", "frost", "fruit", "ghost", "giant", "glass",
    "globe", "glove", "grain", "grape", "grass", "gravy", "great", "green", "grill", "grove",
    "guard", "guest", "guide", "habit", "hatch", "haven", "heart", "hedge", "heron", "hinge",
    "honey", "horse", "hotel", "house", "human", "humor", "igloo", "image", "index", "inlet",
    "irony", "ivory", "jelly", "jewel", "joint", "judge", "juice", "knife", "knock", "label",
    "lance", "latch", "layer", "lemon", "lever", "light", "lilac", "linen", "llama", "lodge",
    "lunar", "magic", "maple", "marsh", "medal", "melon", "metal", "minor", "mirth", "model",
    "money", "month", "moose", "motor", "mound", "mouse", "mouth", "music", "nerve", "night",
    "noble", "north", "novel", "nurse", "ocean", "olive", "onion", "orbit", "order", "otter",
    "oxide", "paint", "panel", "paper", "pasta", "patch", "peach", "pearl", "pedal", "penny",
    "piano", "pilot", "pinch", "pixel", "plaid", "plank", "plant", "plaza", "plumb", "poem",
    "polar", "porch", "pouch", "power", "prism", "prize", "proud", "pulse", "quail", "quake",
    "queen", "quest", "quick", "quiet", "quilt", "quota", "radar", "radio", "raven", "realm",
    "relic", "ridge", "rival", "river", "roast", "robin", "rocky", "rover", "royal", "ruler",
    "rumor", "salad", "scale", "scarf", "scout", "shade", "shark", "sheep", "shelf", "shell",
    "shore", "sight", "skate", "skull", "slate", "sleet", "slope", "smoke", "snail", "snake",
    "solar", "sonic", "spade", "spark", "spice", "spine", "spoon", "sport", "squid", "stack",
    "staff", "stage", "stamp", "steam", "steel", "stone", "storm", "stove", "straw", "sugar",
    "swamp", "sword", "table", "talon", "tempo", "thorn", "tiger", "toast", "token", "topaz",
    "torch", "tower", "trail", "train", "tulip", "ultra", "umbra", "uncle", "unity", "valve",
    "vapor", "vault", "verse", "vigor", "viola", "viper", "vivid", "vocal", "wagon", "waltz",
    "watch", "water", "whale", "wheat", "wheel", "woven", "yacht", "yield", "zebra", "anchor",
    "animal", "answer", "arcade", "archer", "armour", "artist", "autumn", "badger", "ballad",
    "bamboo", "banner", "barrel", "basket", "beacon", "beetle", "bishop", "blazer", "bonnet",
    "bottle", "branch", "breeze", "bridge", "bronze", "bubble", "bucket", "bundle", "burrow",
    "butter", "button", "cactus", "camera", "candle", "canopy", "canyon", "carpet", "castle",
    "cavern", "cellar", "cement", "chalet", "cherry", "chorus", "cinder", "circle", "cobalt",
    "coffee", "collar", "comet", "compass", "copper", "cotton", "coyote", "cradle", "crayon",
    "cruise", "crystal", "cymbal", "dagger", "dancer", "desert", "dinner", "dragon", "dynamo",
    "easel", "eclipse", "elixir", "empire", "engine", "falcon", "fathom", "feather", "ferret",
    "fiddle", "finger", "forest", "fossil", "fountain", "garden", "garlic", "gentle", "ginger",
    "glacier", "goblet", "gopher", "gravel", "guitar", "hammer", "harbor", "harvest", "helmet",
    "hermit", "hollow", "hornet", "iceberg", "island", "jacket", "jaguar", "jasmine", "jester",
    "jungle", "kennel", "kettle", "kitten", "ladder", "lagoon", "lantern", "lizard", "locket",
    "magnet", "mammal", "marble", "meadow", "mirror", "mitten", "monkey", "mortar", "muffin",
    "mussel", "napkin", "nectar", "needle", "nugget", "oracle", "orchard", "oyster", "paddle",
    "palace", "parrot", "pebble", "pepper", "pillow", "pirate", "planet", "pocket", "potato",
    "pumpkin", "puzzle", "quartz", "rabbit", "raisin", "ribbon", "riddle", "rocket", "saddle",
    "salmon", "sandal", "scroll", "shadow", "shovel", "silver", "sparrow", "spider", "spiral",
    "spruce", "statue", "summit", "sunset", "temple", "thimble", "thunder", "timber", "tomato",
    "trumpet", "tunnel", "turkey", "turtle", "velvet", "violin", "voyage", "walnut", "walrus",
    "weasel", "whisper", "willow", "window", "winter", "wizard", "wombat", "yogurt", "zenith",
    "zipper", "airplane", "aquarium", "asteroid", "backpack", "balloons", "bedrock", "blizzard",
    "blossoms", "boulevard", "calendar", "campfire", "cardinal", "carousel", "cathedral",
    "champion", "chestnut", "cinnamon", "compiler", "crescent", "daylight", "diamonds", "dinosaur",
    "dolphins", "elephant", "envelope", "evergreen", "explorer", "fireworks", "flamingo",
    "footprint", "fragrance", "gardener", "gemstone", "glimmer", "grasshopper", "guardian",
    "hailstone", "hedgehog", "horizon", "hurricane", "keyboard", "kingfisher", "labyrinth",
    "landmark", "lavender", "lighthouse", "limestone", "mackerel", "magazine", "mandolin",
    "marathon", "meteorite", "midnight", "mountain", "mushroom", "nightfall", "notebook",
    "obsidian", "octopus", "overture", "panorama", "parchment", "peacock", "pendulum", "penguin",
    "pinecone", "platypus", "porcupine", "quarterly", "railroad", "rainbow", "raspberry",
    "reindeer", "sandstone", "sapphire", "scorpion", "seashell", "shipwreck", "skeleton",
    "snowfall", "spaceship", "squirrel", "starfish", "stingray", "sunflower", "tapestry",
    "telescope", "thistle", "treasure", "triangle", "umbrella", "universe", "vineyard",
    "waterfall", "whirlpool", "windmill", "woodland", "adventurer", "alchemist", "amphibious",
    "apprentice", "archipelago", "battlefield", "blacksmith", "bookkeeper", "butterflies",
    "caterpillar", "chandelier", "chimpanzee", "chrysalis", "cornerstone", "crocodile",
    "earthquake", "expedition", "firefighter", "fisherman", "foundation", "grandfather",
    "greenhouse", "hemisphere", "hummingbird", "invitation", "journalist", "kaleidoscope",
    "lumberjack", "marketplace", "mechanical", "microscope", "mockingbird", "motorcycle",
    "nightingale", "orchestras", "parachute", "pharmacist", "playground", "pomegranate",
    "porcelain", "quicksilver", "rattlesnake", "refrigerator", "renaissance", "salamander",
    "scarecrow", "shipbuilder", "skyscraper", "snowflakes", "spectacles", "strawberry",
    "submarine", "sweetheart", "tablecloth", "thunderbolt", "tournament", "trampoline",
    "typewriter", "volleyball", "watermelon", "wheelbarrow", "wilderness", "accomplishment",
    "acknowledgment", "administration", "architectural", "astronomically", "bioluminescent",
    "championships", "circumference", "communication", "comprehensive", "concentration",
    "configuration", "constellation", "contemporary", "correspondence", "craftsmanship",
    "determination", "developmental", "encyclopedia", "entertainment", "environmental",
    "extraordinary", "grandchildren", "hallucination", "headquarters", "hydroelectric",
    "identification", "illustrations", "imagination", "impressionism", "independence",
    "infrastructure", "instrumental", "international", "investigation", "kindergarten",
    "lexicographer", "manufacturing", "mathematician", "meteorologist", "metropolitan",
    "neighborhoods", "observatories", "opportunities", "orchestration", "paleontology",
    "photographer", "precipitation", "psychological", "questionnaire", "recommendation",
    "refrigeration", "responsibility", "revolutionary", "sophisticated", "thermodynamics",
    "transformation", "transportation", "understanding", "unforgettable",
];
