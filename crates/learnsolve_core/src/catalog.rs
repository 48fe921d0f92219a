//! crates/learnsolve_core/src/catalog.rs
//!
//! The built-in curriculum as a compact seed table. `Curriculum::builtin`
//! expands each topic's titles into questions.

use crate::curriculum::DifficultyId;

pub(crate) struct TopicSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub base_key: &'static str,
    pub titles: &'static [&'static str],
}

pub(crate) struct DifficultySeed {
    pub id: DifficultyId,
    pub topics: &'static [TopicSeed],
}

pub(crate) struct DomainSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub difficulties: &'static [DifficultySeed],
}

macro_rules! topic {
    ($id:literal, $name:literal, $base:literal, [$($title:literal),* $(,)?]) => {
        TopicSeed {
            id: $id,
            name: $name,
            base_key: $base,
            titles: &[$($title),*],
        }
    };
}

pub(crate) static CATALOG: &[DomainSeed] = &[
    DomainSeed {
        id: "maths",
        name: "Mathematics",
        short_name: "Maths",
        difficulties: &[
            DifficultySeed {
                id: DifficultyId::Beginner,
                topics: &[
                    topic!("number-system", "Number System", "maths-beg-ns", [
                        "Find the smallest 3-digit number divisible by 9",
                        "Write the place value of 7 in 47,582",
                        "Find the sum of first 10 natural numbers",
                    ]),
                    topic!("lcm-hcf", "LCM & HCF", "maths-beg-lh", [
                        "Find the HCF of 12 and 18",
                        "Find the LCM of 6 and 15",
                        "Find the LCM and HCF of 24 and 36",
                    ]),
                    topic!("fractions-decimals", "Fractions & Decimals", "maths-beg-fd", [
                        "Convert 3/4 into decimal",
                        "Add 2/5 + 3/10",
                        "Subtract 1.25 from 4.5",
                    ]),
                    topic!("percentages", "Percentages", "maths-beg-pct", [
                        "Find 20% of 150",
                        "A price of ₹500 is reduced by 10%. Find the new price",
                        "A number is increased by 25% to become 250. Find the original number",
                    ]),
                    topic!("ratio-proportion", "Ratio & Proportion", "maths-beg-rp", [
                        "Simplify the ratio 18 : 24",
                        "Divide ₹600 in the ratio 2 : 3",
                        "If 5 books cost ₹150, find the cost of 8 books",
                    ]),
                    topic!("averages", "Averages", "maths-beg-avg", [
                        "Find the average of 5, 10, and 15",
                        "The average of 4 numbers is 20. Find their sum",
                        "The average age of 6 students is 18. A new student joins; the average becomes 19. Find the new student's age",
                    ]),
                    topic!("simple-compound-interest", "Simple & Compound Interest", "maths-beg-sci", [
                        "Find the simple interest on ₹1000 at 10% per year for 2 years",
                        "Find the amount after 1 year on ₹2000 at 5% simple interest",
                        "Find the compound interest on ₹1000 at 10% for 2 years",
                    ]),
                    topic!("linear-equations", "Linear Equations (One Variable)", "maths-beg-le", [
                        "Solve: x + 7 = 15",
                        "Solve: 2x = 18",
                        "Solve: 3x − 5 = 16",
                    ]),
                    topic!("basic-geometry", "Basic Geometry (Lines & Angles)", "maths-beg-geo", [
                        "Find the complement of 35°",
                        "Find the supplementary angle of 110°",
                        "If two angles are vertically opposite and one angle is 50°, find the other",
                    ]),
                    topic!("triangles", "Triangles", "maths-beg-tri", [
                        "Find the third angle of a triangle if two angles are 40° and 70°",
                        "State the sum of interior angles of a triangle",
                        "Can a triangle have angles 90°, 45°, and 45°? Explain",
                    ]),
                    topic!("data-handling", "Data Handling", "maths-beg-dh", [
                        "Find the mean of 2, 4, 6, 8",
                        "Find the median of 3, 7, 9, 11, 13",
                        "Find the mode of: 1, 2, 2, 3, 4",
                    ]),
                    topic!("profit-loss", "Profit & Loss", "maths-beg-pl", [
                        "A shopkeeper buys an item for ₹200 and sells it for ₹250. Find the profit",
                        "Find the loss if a product is bought for ₹500 and sold for ₹450",
                        "Find the profit percentage if CP = ₹400 and SP = ₹500",
                    ]),
                    topic!("time-work", "Time & Work", "maths-beg-tw", [
                        "A can do a work in 10 days. How much work does he do in 1 day?",
                        "A work is completed in 5 days. What part of work is done in 1 day?",
                        "If A can complete a work in 8 days, how long will he take to complete half the work?",
                    ]),
                    topic!("time-distance", "Time & Distance", "maths-beg-td", [
                        "Find the speed of a vehicle that travels 60 km in 2 hours",
                        "Find the distance covered at a speed of 40 km/h in 3 hours",
                        "Find the time taken to cover 120 km at 60 km/h",
                    ]),
                    topic!("mensuration-2d", "Mensuration (2D Basics)", "maths-beg-m2d", [
                        "Find the perimeter of a square of side 5 cm",
                        "Find the area of a rectangle of length 8 cm and breadth 6 cm",
                        "Find the area of a triangle with base 10 cm and height 5 cm",
                    ]),
                    topic!("basic-algebra", "Basic Algebra", "maths-beg-alg", [
                        "Simplify: 3x + 5x",
                        "Find the value of x if x = 4 in the expression 2x + 3",
                        "Simplify: (x + 3) − (2x − 1)",
                    ]),
                    topic!("squares-cubes", "Squares & Cubes", "maths-beg-sc", [
                        "Find the square of 12",
                        "Find the cube of 5",
                        "Find the square root of 144",
                    ]),
                    topic!("simplification", "Simplification", "maths-beg-sim", [
                        "Simplify: 10 + 5 × 2",
                        "Simplify: (12 ÷ 3) + 4",
                        "Simplify: 20 − {5 + (3 × 2)}",
                    ]),
                    topic!("basic-probability", "Basic Probability", "maths-beg-prob", [
                        "What is the probability of getting a head when tossing a coin?",
                        "What is the probability of getting an even number on a dice?",
                        "How many total outcomes are possible when a dice is thrown?",
                    ]),
                    topic!("logical-basics", "Logical Basics (Math Reasoning)", "maths-beg-log", [
                        "Find the next number: 2, 4, 6, __",
                        "Find the missing number: 5, 10, 15, __",
                        "Which number is odd: 12, 18, 21, 24?",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Intermediate,
                topics: &[
                    topic!("quadratic-equations", "Quadratic Equations", "maths-int-qe", [
                        "Solve: x² − 5x + 6 = 0",
                        "Solve: x² + 7x + 10 = 0",
                        "Find the roots of x² − 9 = 0",
                    ]),
                    topic!("inequalities", "Inequalities", "maths-int-ineq", [
                        "Solve: x + 3 < 10",
                        "Solve: 2x − 5 ≥ 9",
                        "Solve: −3x ≤ 12",
                    ]),
                    topic!("arithmetic-progression", "Arithmetic Progression (AP)", "maths-int-ap", [
                        "Find the 10th term of AP: 2, 5, 8, …",
                        "Find the common difference of 7, 14, 21",
                        "Find the next term of AP: 4, 9, 14, __",
                    ]),
                    topic!("coordinate-geometry", "Coordinate Geometry (2D)", "maths-int-cg", [
                        "Find the distance between (0,0) and (3,4)",
                        "Find the midpoint of (2,4) and (6,8)",
                        "Find the coordinates of origin",
                    ]),
                    topic!("trigonometry-basics", "Trigonometry (Basics)", "maths-int-trig", [
                        "Find sin 30°",
                        "Find cos 60°",
                        "Find tan 45°",
                    ]),
                    topic!("permutations-combinations", "Permutations & Combinations", "maths-int-pc", [
                        "Find the number of ways to arrange 3 objects",
                        "Find 5P2",
                        "Find 6C2",
                    ]),
                    topic!("probability-basic", "Probability (Basic)", "maths-int-prob", [
                        "Find probability of getting 6 on a dice",
                        "Find probability of getting red ball from 3 red, 2 blue",
                        "Find probability of getting tail when tossing a coin",
                    ]),
                    topic!("mensuration-3d", "Mensuration (3D)", "maths-int-m3d", [
                        "Find volume of cube of side 4 cm",
                        "Find curved surface area of cylinder (r=7, h=10)",
                        "Find volume of sphere of radius 7 cm",
                    ]),
                    topic!("functions-graphs", "Functions & Graphs", "maths-int-fg", [
                        "Find value of f(x)=2x+3 when x=2",
                        "Is f(x)=x² an even function?",
                        "Find f(−1) for f(x)=x²+1",
                    ]),
                    topic!("set-theory", "Set Theory", "maths-int-set", [
                        "Write elements of set of even numbers less than 10",
                        "Find A ∪ B if A={1,2}, B={2,3}",
                        "Find A ∩ B if A={1,3,5}, B={3,5,7}",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Advanced,
                topics: &[
                    topic!("limits", "Limits", "maths-adv-lim", [
                        "Find lim x→0 (x+2)",
                        "Find lim x→2 (x² − 4)/(x − 2)",
                        "Find lim x→∞ 1/x",
                    ]),
                    topic!("differentiation", "Differentiation", "maths-adv-diff", [
                        "Find derivative of x²",
                        "Find derivative of 5x",
                        "Find derivative of sin x",
                    ]),
                    topic!("integration", "Integration", "maths-adv-int", [
                        "∫ x dx",
                        "∫ 5 dx",
                        "∫ x² dx",
                    ]),
                    topic!("matrices", "Matrices", "maths-adv-mat", [
                        "Find order of a 2×3 matrix",
                        "Add matrices [[1,2],[3,4]] and [[2,3],[4,5]]",
                        "Find transpose of a 2×2 matrix",
                    ]),
                    topic!("determinants", "Determinants", "maths-adv-det", [
                        "Find determinant of [[1,2],[3,4]]",
                        "Find determinant of identity matrix",
                        "Check if determinant of [[2,4],[1,2]] is zero",
                    ]),
                    topic!("vector-algebra", "Vector Algebra", "maths-adv-vec", [
                        "Find magnitude of vector i + j",
                        "Find i · j",
                        "Find angle between parallel vectors",
                    ]),
                    topic!("complex-numbers", "Complex Numbers", "maths-adv-cn", [
                        "Find i²",
                        "Simplify (2 + 3i) + (1 − i)",
                        "Find conjugate of 4 + 5i",
                    ]),
                    topic!("advanced-probability", "Advanced Probability", "maths-adv-prob", [
                        "Probability of drawing ace from deck",
                        "Probability of getting at least one head in two tosses",
                        "Probability of getting sum 7 on two dice",
                    ]),
                    topic!("statistics", "Statistics", "maths-adv-stat", [
                        "Find mean of 5,10,15",
                        "Find variance of 2,2,2",
                        "Find standard deviation of equal numbers",
                    ]),
                    topic!("differential-equations", "Differential Equations", "maths-adv-de", [
                        "Solve dy/dx = 0",
                        "Solve dy/dx = x",
                        "Find order of d²y/dx² = x",
                    ]),
                ],
            },
        ],
    },
    DomainSeed {
        id: "aptitude",
        name: "Aptitude",
        short_name: "Aptitude",
        difficulties: &[
            DifficultySeed {
                id: DifficultyId::Beginner,
                topics: &[
                    topic!("percentages", "Percentages", "apt-beg-pct", [
                        "Find 10% of 200",
                        "Increase 300 by 20%",
                        "Decrease 500 by 10%",
                    ]),
                    topic!("ratio-proportion", "Ratio & Proportion", "apt-beg-rp", [
                        "Simplify 12:18",
                        "Divide 100 in ratio 2:3",
                        "If 3 pens cost ₹30, find cost of 5 pens",
                    ]),
                    topic!("profit-loss", "Profit & Loss", "apt-beg-pl", [
                        "CP=200, SP=250 find profit",
                        "CP=500, SP=450 find loss",
                        "Find profit % if CP=400, SP=500",
                    ]),
                    topic!("simple-interest", "Simple Interest", "apt-beg-si", [
                        "Find SI on ₹1000 at 10% for 1 year",
                        "Find SI on ₹500 at 5% for 2 years",
                        "Find total amount if SI=₹200 on ₹1000",
                    ]),
                    topic!("time-work", "Time & Work", "apt-beg-tw", [
                        "A does work in 10 days; find 1 day work",
                        "Work completed in 5 days; find per day work",
                        "A completes work in 8 days; how much in 1 day?",
                    ]),
                    topic!("time-distance", "Time & Distance", "apt-beg-td", [
                        "Speed = distance/time, find speed",
                        "Find distance if speed 60 km/h, time 2 h",
                        "Find time if distance 120 km, speed 40 km/h",
                    ]),
                    topic!("averages", "Averages", "apt-beg-avg", [
                        "Average of 2,4,6",
                        "Average of first 10 natural numbers",
                        "Average age of 3 people is 20; find sum",
                    ]),
                    topic!("number-series", "Number Series", "apt-beg-ns", [
                        "Find next: 2,4,6,__",
                        "Find next: 5,10,15,__",
                        "Find next: 1,4,9,__",
                    ]),
                    topic!("simplification", "Simplification", "apt-beg-sim", [
                        "10 + 5 × 2",
                        "(12 ÷ 3) + 4",
                        "20 − (5 + 3)",
                    ]),
                    topic!("logical-basics", "Logical Basics", "apt-beg-log", [
                        "Find odd one: 2,4,6,9",
                        "Find missing number: 1,3,5,__",
                        "True or False: All squares are rectangles",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Intermediate,
                topics: &[
                    topic!("compound-interest", "Compound Interest", "apt-int-ci", [
                        "Find CI on ₹1000 at 10% for 2 years",
                        "Find amount after 1 year at 5% CI",
                        "Difference between CI and SI for 2 years",
                    ]),
                    topic!("pipes-cisterns", "Pipes & Cisterns", "apt-int-pc", [
                        "Pipe fills tank in 10 hrs; find 1 hr work",
                        "Pipe empties tank in 15 hrs; find 1 hr work",
                        "One pipe fills, one empties; find net work",
                    ]),
                    topic!("boats-streams", "Boats & Streams", "apt-int-bs", [
                        "Find speed upstream",
                        "Find speed downstream",
                        "Find speed of boat in still water",
                    ]),
                    topic!("clocks", "Clocks", "apt-int-clk", [
                        "Angle at 3:00",
                        "Angle at 6:00",
                        "How many times hands coincide in 24 hrs?",
                    ]),
                    topic!("calendars", "Calendars", "apt-int-cal", [
                        "Find day on 15 Aug 1947",
                        "How many odd days in a leap year?",
                        "How many days in 3 non-leap years?",
                    ]),
                    topic!("permutation-combination", "Permutation & Combination", "apt-int-pnc", [
                        "Number of ways to arrange 4 people",
                        "Find 7C2",
                        "Find 5P3",
                    ]),
                    topic!("probability", "Probability", "apt-int-prob", [
                        "Probability of red ball from bag",
                        "Probability of even number on dice",
                        "Probability of tail in coin toss",
                    ]),
                    topic!("data-interpretation", "Data Interpretation", "apt-int-di", [
                        "Find average from given table",
                        "Find highest value in bar graph",
                        "Find percentage increase from chart",
                    ]),
                    topic!("blood-relations", "Blood Relations", "apt-int-br", [
                        "Father's son's sister relation?",
                        "Mother's brother is called?",
                        "Son of my uncle is my ___",
                    ]),
                    topic!("coding-decoding", "Coding-Decoding", "apt-int-cd", [
                        "If CAT → DBU, code DOG",
                        "If A=1, Z=?",
                        "If 5 → E, 10 → ?",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Advanced,
                topics: &[
                    topic!("advanced-di", "Advanced DI (Caselets)", "apt-adv-di", [
                        "Find profit % from given table",
                        "Find highest growth year",
                        "Find average sales",
                    ]),
                    topic!("logical-puzzles", "Logical Puzzles", "apt-adv-lp", [
                        "Seating arrangement with 5 people",
                        "Direction-based puzzle",
                        "Floor-based puzzle",
                    ]),
                    topic!("seating-arrangement", "Seating Arrangement (Complex)", "apt-adv-sa", [
                        "Circular seating facing center",
                        "Linear seating with conditions",
                        "Mixed direction seating",
                    ]),
                    topic!("input-output", "Input–Output", "apt-adv-io", [
                        "Step-based number rearrangement",
                        "Word-number transformation",
                        "Alphabet shifting logic",
                    ]),
                    topic!("advanced-probability", "Advanced Probability", "apt-adv-prob", [
                        "Probability of at least one head",
                        "Probability of card not being face card",
                        "Probability of sum greater than 8 on dice",
                    ]),
                    topic!("venn-diagrams", "Venn Diagrams", "apt-adv-vd", [
                        "Find common students in 2 sets",
                        "Find only A students",
                        "Find neither A nor B students",
                    ]),
                    topic!("decision-making", "Decision Making", "apt-adv-dm", [
                        "Choose best option from data",
                        "Ethical dilemma-based decision",
                        "Business scenario decision",
                    ]),
                    topic!("critical-reasoning", "Critical Reasoning", "apt-adv-cr", [
                        "Identify assumption",
                        "Identify conclusion",
                        "Strengthen the argument",
                    ]),
                    topic!("quantitative-comparison", "Quantitative Comparison", "apt-adv-qc", [
                        "Compare two algebraic values",
                        "Compare two fractions",
                        "Compare two percentages",
                    ]),
                    topic!("mixed-model", "Mixed Model Questions", "apt-adv-mm", [
                        "Combination of time, work, and ratio",
                        "Probability + permutation question",
                        "DI + percentage mix",
                    ]),
                ],
            },
        ],
    },
    DomainSeed {
        id: "dsa",
        name: "Data Structures & Algorithms",
        short_name: "DSA",
        difficulties: &[
            DifficultySeed {
                id: DifficultyId::Beginner,
                topics: &[
                    topic!("time-space-complexity", "Time & Space Complexity", "dsa-beg-tsc", [
                        "Find time complexity of a loop running from 1 to n",
                        "Find time complexity of two nested loops",
                        "What is the space complexity of storing an array of size n?",
                    ]),
                    topic!("arrays", "Arrays", "dsa-beg-arr", [
                        "Find the maximum element in an array",
                        "Reverse an array",
                        "Find the sum of all elements in an array",
                    ]),
                    topic!("strings", "Strings", "dsa-beg-str", [
                        "Reverse a string",
                        "Check if a string is palindrome",
                        "Count vowels in a string",
                    ]),
                    topic!("recursion-basics", "Recursion (Basics)", "dsa-beg-rec", [
                        "Print numbers from 1 to n using recursion",
                        "Find factorial of n using recursion",
                        "Find sum of first n numbers using recursion",
                    ]),
                    topic!("searching", "Searching", "dsa-beg-src", [
                        "Perform linear search on an array",
                        "Perform binary search on a sorted array",
                        "Find the position of an element in an array",
                    ]),
                    topic!("sorting-basic", "Sorting (Basic)", "dsa-beg-srt", [
                        "Sort an array using bubble sort",
                        "Sort an array using selection sort",
                        "Sort an array using insertion sort",
                    ]),
                    topic!("stack-introduction", "Stack (Introduction)", "dsa-beg-stk", [
                        "Push an element into stack",
                        "Pop an element from stack",
                        "Display stack elements",
                    ]),
                    topic!("queue-introduction", "Queue (Introduction)", "dsa-beg-que", [
                        "Enqueue an element into queue",
                        "Dequeue an element from queue",
                        "Check if queue is empty",
                    ]),
                    topic!("basic-math-algorithms", "Basic Math Algorithms", "dsa-beg-math", [
                        "Check if a number is prime",
                        "Find GCD of two numbers",
                        "Find LCM of two numbers",
                    ]),
                    topic!("two-pointer-technique", "Two Pointer Technique", "dsa-beg-tp", [
                        "Find pair with given sum in sorted array",
                        "Remove duplicates from sorted array",
                        "Reverse array using two pointers",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Intermediate,
                topics: &[
                    topic!("linked-list", "Linked List", "dsa-int-ll", [
                        "Insert a node at beginning",
                        "Delete a node from linked list",
                        "Traverse a linked list",
                    ]),
                    topic!("stack-applications", "Stack (Applications)", "dsa-int-stk", [
                        "Reverse string using stack",
                        "Check balanced parentheses",
                        "Convert infix to postfix",
                    ]),
                    topic!("queue-applications", "Queue (Applications)", "dsa-int-que", [
                        "Implement queue using array",
                        "Implement circular queue",
                        "Implement queue using stack",
                    ]),
                    topic!("hashing", "Hashing", "dsa-int-hash", [
                        "Count frequency of elements in array",
                        "Find first non-repeating element",
                        "Check if two arrays are equal",
                    ]),
                    topic!("binary-tree", "Trees (Binary Tree)", "dsa-int-bt", [
                        "Perform inorder traversal",
                        "Perform preorder traversal",
                        "Perform postorder traversal",
                    ]),
                    topic!("binary-search-tree", "Binary Search Tree", "dsa-int-bst", [
                        "Insert node in BST",
                        "Search element in BST",
                        "Find minimum element in BST",
                    ]),
                    topic!("recursion-backtracking", "Recursion & Backtracking", "dsa-int-rb", [
                        "Generate all subsets of a set",
                        "Solve Tower of Hanoi",
                        "Generate permutations of string",
                    ]),
                    topic!("sorting-advanced", "Sorting (Advanced)", "dsa-int-srt", [
                        "Sort array using merge sort",
                        "Sort array using quick sort",
                        "Compare merge sort and quick sort",
                    ]),
                    topic!("sliding-window", "Sliding Window", "dsa-int-sw", [
                        "Find maximum sum subarray of size k",
                        "Find first negative number in every window",
                        "Find longest substring with k distinct characters",
                    ]),
                    topic!("bit-manipulation", "Bit Manipulation", "dsa-int-bit", [
                        "Check if number is even or odd",
                        "Find number of set bits",
                        "Find the only non-repeating element",
                    ]),
                ],
            },
            DifficultySeed {
                id: DifficultyId::Advanced,
                topics: &[
                    topic!("heap", "Heap", "dsa-adv-heap", [
                        "Implement min heap",
                        "Find kth largest element",
                        "Convert array into heap",
                    ]),
                    topic!("trie", "Trie", "dsa-adv-trie", [
                        "Insert word into trie",
                        "Search word in trie",
                        "Check prefix existence",
                    ]),
                    topic!("graph-basics", "Graph (Basics)", "dsa-adv-gb", [
                        "Represent graph using adjacency list",
                        "Perform BFS traversal",
                        "Perform DFS traversal",
                    ]),
                    topic!("graph-algorithms", "Graph Algorithms", "dsa-adv-ga", [
                        "Find shortest path using Dijkstra",
                        "Detect cycle in graph",
                        "Find minimum spanning tree",
                    ]),
                    topic!("dp-basics", "Dynamic Programming (Basics)", "dsa-adv-dpb", [
                        "Find nth Fibonacci number",
                        "Solve 0/1 knapsack problem",
                        "Find longest common subsequence",
                    ]),
                    topic!("advanced-dp", "Advanced DP", "dsa-adv-dpa", [
                        "Find longest increasing subsequence",
                        "Solve matrix chain multiplication",
                        "Solve coin change problem",
                    ]),
                    topic!("segment-tree", "Segment Tree", "dsa-adv-seg", [
                        "Build segment tree",
                        "Range sum query",
                        "Update element in segment tree",
                    ]),
                    topic!("disjoint-set", "Disjoint Set (Union–Find)", "dsa-adv-dsu", [
                        "Implement union operation",
                        "Implement find operation",
                        "Detect cycle using DSU",
                    ]),
                    topic!("string-algorithms", "String Algorithms", "dsa-adv-sa", [
                        "Implement KMP pattern matching",
                        "Find longest prefix suffix array",
                        "Implement Z-algorithm",
                    ]),
                    topic!("topological-sorting", "Topological Sorting", "dsa-adv-ts", [
                        "Perform topological sort using DFS",
                        "Perform topological sort using BFS",
                        "Check if graph has cycle using topo sort",
                    ]),
                ],
            },
        ],
    },
];
