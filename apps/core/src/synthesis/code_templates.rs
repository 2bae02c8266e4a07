//! Starter code templates, one per language.
//!
//! Placeholders: `{prompt}` (single line, for comments), `{title}` (prompt
//! with its first letter capitalized), `{prompt_str}` (escaped for a quoted
//! string literal), `{prompt_html}` (HTML-escaped), `{class}` (PascalCase
//! identifier), `{ident}` (lower-case identifier), `{snake}` (snake_case
//! identifier).

use super::code::CodeLanguage;

/// Template text for `language`
pub fn code_template(language: CodeLanguage) -> &'static str {
    match language {
        CodeLanguage::JavaScript => JAVASCRIPT,
        CodeLanguage::Python => PYTHON,
        CodeLanguage::Html => HTML,
        CodeLanguage::Java => JAVA,
    }
}

const JAVASCRIPT: &str = r##"// {prompt}
// Generated by PromptForge

/**
 * {title} - A JavaScript solution
 * This code demonstrates best practices and modern JavaScript features
 */

class {class}Manager {
    constructor() {
        this.data = new Map();
        this.isInitialized = false;
    }

    /**
     * Initialize the {prompt} system
     * @param {Object} config - Configuration options
     * @returns {Promise<boolean>} Success status
     */
    async initialize(config = {}) {
        try {
            this.isInitialized = true;
            console.log("{prompt_str} system initialized successfully");
            return true;
        } catch (error) {
            console.error("Failed to initialize {prompt_str} system:", error);
            return false;
        }
    }

    /**
     * Process {prompt} data
     * @param {*} input - Input data to process
     * @returns {Object} Processed result
     */
    process(input) {
        if (!this.isInitialized) {
            throw new Error("{prompt_str} system not initialized");
        }

        const processed = this.validateAndProcess(input);

        return {
            original: input,
            processed: processed,
            timestamp: new Date().toISOString(),
            metadata: {
                prompt: "{prompt_str}",
                language: "JavaScript",
                version: "1.0.0"
            }
        };
    }

    /**
     * Validate and process input data
     * @param {*} input - Input to validate
     * @returns {*} Processed data
     */
    validateAndProcess(input) {
        if (input === null || input === undefined) {
            throw new Error("Input cannot be null or undefined");
        }

        if (typeof input === "string") {
            return input.trim().toLowerCase();
        } else if (Array.isArray(input)) {
            return input.filter(item => item != null);
        } else if (typeof input === "object") {
            return Object.keys(input).reduce((acc, key) => {
                if (input[key] != null) acc[key] = input[key];
                return acc;
            }, {});
        }

        return input;
    }
}

// Example usage
const {ident}Manager = new {class}Manager();

{ident}Manager.initialize()
    .then(() => {
        const result = {ident}Manager.process("Sample data for {prompt_str}");
        console.log("Processing result:", result);
    })
    .catch(error => console.error("Error:", error));

if (typeof module !== "undefined" && module.exports) {
    module.exports = { {class}Manager };
}
"##;

const PYTHON: &str = r##"# {prompt}
# Generated by PromptForge

"""
{title} - A Python solution
This code demonstrates best practices and modern Python features
"""

import asyncio
import datetime
import json
from dataclasses import dataclass
from pathlib import Path
from typing import Any, Dict, Optional


@dataclass
class {class}Config:
    """Configuration for the {prompt} system"""
    debug_mode: bool = False
    max_retries: int = 3
    timeout: float = 30.0
    data_path: Optional[Path] = None

    def __post_init__(self):
        if self.data_path is None:
            self.data_path = Path.cwd() / "data" / "{snake}"


class {class}Manager:
    """Manages {prompt} operations"""

    def __init__(self, config: Optional[{class}Config] = None):
        self.config = config or {class}Config()
        self.is_initialized = False
        self.data_cache: Dict[str, Any] = {}

    async def initialize(self) -> bool:
        """Initialize the {prompt} system"""
        try:
            self.config.data_path.mkdir(parents=True, exist_ok=True)
            self.is_initialized = True
            print("{prompt_str} system initialized successfully")
            return True
        except Exception as e:
            print("Failed to initialize {prompt_str} system:", e)
            return False

    def process(self, input_data: Any) -> Dict[str, Any]:
        """Process {prompt} data"""
        if not self.is_initialized:
            raise RuntimeError("{prompt_str} system not initialized")

        processed_data = self._validate_and_process(input_data)

        return {
            "original": input_data,
            "processed": processed_data,
            "timestamp": datetime.datetime.now().isoformat(),
            "metadata": {
                "prompt": "{prompt_str}",
                "language": "Python",
                "version": "1.0.0",
            },
        }

    def _validate_and_process(self, input_data: Any) -> Any:
        """Validate and process input data"""
        if input_data is None:
            raise ValueError("Input cannot be None")

        if isinstance(input_data, str):
            return input_data.strip().lower()
        elif isinstance(input_data, list):
            return [item for item in input_data if item is not None]
        elif isinstance(input_data, dict):
            return {k: v for k, v in input_data.items() if v is not None}

        return input_data


async def main():
    """Demonstrate usage"""
    {snake}_manager = {class}Manager()

    if await {snake}_manager.initialize():
        result = {snake}_manager.process("Sample data for {prompt_str}")
        print("Processing result:", json.dumps(result, indent=2))


if __name__ == "__main__":
    asyncio.run(main())
"##;

const HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{prompt_html}</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .{ident}-container {
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(20px);
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
            border: 1px solid rgba(255, 255, 255, 0.2);
            max-width: 600px;
            width: 100%;
            text-align: center;
        }

        .{ident}-title {
            font-size: 2.5rem;
            margin-bottom: 20px;
            background: linear-gradient(45deg, #ff6b6b, #4ecdc4);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }

        .{ident}-description {
            font-size: 1.2rem;
            margin-bottom: 30px;
            line-height: 1.6;
            opacity: 0.9;
        }

        .{ident}-features {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin: 30px 0;
        }

        .feature {
            background: rgba(255, 255, 255, 0.1);
            padding: 20px;
            border-radius: 15px;
            border: 1px solid rgba(255, 255, 255, 0.2);
            transition: transform 0.3s ease, box-shadow 0.3s ease;
            opacity: 0;
            animation: fadeInUp 0.6s ease forwards;
        }

        .feature:hover {
            transform: translateY(-5px);
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
        }

        .feature-icon {
            font-size: 2rem;
            margin-bottom: 15px;
        }

        .feature-title {
            font-size: 1.1rem;
            margin-bottom: 10px;
            font-weight: 600;
        }

        .feature-description {
            font-size: 0.9rem;
            opacity: 0.8;
            line-height: 1.4;
        }

        .{ident}-button {
            background: linear-gradient(45deg, #ff6b6b, #4ecdc4);
            color: white;
            border: none;
            padding: 15px 30px;
            border-radius: 25px;
            font-size: 1.1rem;
            cursor: pointer;
            transition: transform 0.3s ease, box-shadow 0.3s ease;
            margin-top: 20px;
        }

        .{ident}-button:hover {
            transform: scale(1.05);
            box-shadow: 0 5px 20px rgba(0, 0, 0, 0.3);
        }

        @keyframes fadeInUp {
            from {
                opacity: 0;
                transform: translateY(30px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        @media (max-width: 768px) {
            .{ident}-container {
                margin: 20px;
                padding: 30px;
            }

            .{ident}-title {
                font-size: 2rem;
            }
        }
    </style>
</head>
<body>
    <div class="{ident}-container">
        <h1 class="{ident}-title">{prompt_html}</h1>
        <p class="{ident}-description">
            A responsive web page generated for "{prompt_html}".
            It uses a glassmorphism design with smooth animations.
        </p>

        <div class="{ident}-features">
            <div class="feature">
                <div class="feature-icon">🎨</div>
                <div class="feature-title">Modern Design</div>
                <div class="feature-description">Glassmorphism UI with smooth animations</div>
            </div>
            <div class="feature">
                <div class="feature-icon">📱</div>
                <div class="feature-title">Responsive</div>
                <div class="feature-description">Works on all screen sizes</div>
            </div>
            <div class="feature">
                <div class="feature-icon">⚡</div>
                <div class="feature-title">Fast &amp; Light</div>
                <div class="feature-description">Optimized for performance</div>
            </div>
        </div>

        <button class="{ident}-button" onclick="handle{class}Action()">
            Explore {prompt_html}
        </button>
    </div>

    <script>
        function handle{class}Action() {
            alert("{prompt_str} action triggered! This is a demo of the generated functionality.");
        }

        document.addEventListener("DOMContentLoaded", function () {
            document.querySelectorAll(".feature").forEach(function (feature, index) {
                feature.style.animationDelay = (index * 0.1) + "s";
            });
        });
    </script>
</body>
</html>
"##;

const JAVA: &str = r##"// {prompt}
// Generated by PromptForge

import java.time.LocalDateTime;
import java.time.format.DateTimeFormatter;
import java.util.*;
import java.util.stream.Collectors;

/**
 * {title} - A Java solution
 * This code demonstrates best practices and modern Java features
 */
public class {class}Manager {

    private static final String VERSION = "1.0.0";
    private static final String LANGUAGE = "Java";
    private static final DateTimeFormatter TIMESTAMP_FORMATTER = DateTimeFormatter.ofPattern("yyyy-MM-dd HH:mm:ss");

    private boolean isInitialized;
    private final Map<String, Object> dataCache;
    private final {class}Config config;

    /**
     * Configuration for the {prompt} system
     */
    public static class {class}Config {
        private final boolean debugMode;
        private final int maxRetries;
        private final double timeout;
        private final String dataPath;

        private {class}Config(Builder builder) {
            this.debugMode = builder.debugMode;
            this.maxRetries = builder.maxRetries;
            this.timeout = builder.timeout;
            this.dataPath = builder.dataPath;
        }

        public static class Builder {
            private boolean debugMode = false;
            private int maxRetries = 3;
            private double timeout = 30.0;
            private String dataPath = "data/{ident}";

            public Builder debugMode(boolean debugMode) {
                this.debugMode = debugMode;
                return this;
            }

            public Builder maxRetries(int maxRetries) {
                this.maxRetries = maxRetries;
                return this;
            }

            public Builder timeout(double timeout) {
                this.timeout = timeout;
                return this;
            }

            public Builder dataPath(String dataPath) {
                this.dataPath = dataPath;
                return this;
            }

            public {class}Config build() {
                return new {class}Config(this);
            }
        }
    }

    public {class}Manager() {
        this(new {class}Config.Builder().build());
    }

    public {class}Manager({class}Config config) {
        this.config = config;
        this.isInitialized = false;
        this.dataCache = new HashMap<>();
    }

    /**
     * Initialize the {prompt} system
     * @return true if initialization succeeded
     */
    public boolean initialize() {
        try {
            this.isInitialized = true;
            System.out.println("{prompt_str} system initialized successfully");
            return true;
        } catch (Exception e) {
            System.err.println("Failed to initialize {prompt_str} system: " + e.getMessage());
            return false;
        }
    }

    /**
     * Process {prompt} data
     * @param input Input data to process
     * @return ProcessingResult containing processed data and metadata
     * @throws IllegalStateException if the system is not initialized
     */
    public ProcessingResult process(Object input) {
        if (!isInitialized) {
            throw new IllegalStateException("{prompt_str} system not initialized");
        }

        Object processedData = validateAndProcess(input);
        return new ProcessingResult(input, processedData);
    }

    private Object validateAndProcess(Object input) {
        if (input == null) {
            throw new IllegalArgumentException("Input cannot be null");
        }

        if (input instanceof String) {
            return ((String) input).trim().toLowerCase();
        } else if (input instanceof Collection) {
            return ((Collection<?>) input).stream()
                    .filter(Objects::nonNull)
                    .collect(Collectors.toList());
        } else if (input instanceof Map) {
            return ((Map<?, ?>) input).entrySet().stream()
                    .filter(entry -> entry.getValue() != null)
                    .collect(Collectors.toMap(
                            Map.Entry::getKey,
                            Map.Entry::getValue,
                            (existing, replacement) -> existing,
                            HashMap::new
                    ));
        }

        return input;
    }

    /**
     * Result of one processing call
     */
    public static class ProcessingResult {
        private final Object original;
        private final Object processed;
        private final String timestamp;
        private final Map<String, Object> metadata;

        public ProcessingResult(Object original, Object processed) {
            this.original = original;
            this.processed = processed;
            this.timestamp = LocalDateTime.now().format(TIMESTAMP_FORMATTER);
            this.metadata = createMetadata();
        }

        private Map<String, Object> createMetadata() {
            Map<String, Object> meta = new HashMap<>();
            meta.put("prompt", "{prompt_str}");
            meta.put("language", LANGUAGE);
            meta.put("version", VERSION);
            return meta;
        }

        public Object getOriginal() { return original; }
        public Object getProcessed() { return processed; }
        public String getTimestamp() { return timestamp; }
        public Map<String, Object> getMetadata() { return metadata; }

        @Override
        public String toString() {
            return String.format("ProcessingResult{original=%s, processed=%s, timestamp='%s'}",
                    original, processed, timestamp);
        }
    }

    public static void main(String[] args) {
        {class}Manager manager = new {class}Manager();

        if (manager.initialize()) {
            try {
                ProcessingResult result = manager.process("Sample data for {prompt_str}");
                System.out.println("Processing result: " + result);
            } catch (Exception e) {
                System.err.println("Error during processing: " + e.getMessage());
            }
        }
    }
}
"##;
