//! Built-in lodash/fp mapping tables.
//!
//! Plain data: nothing here is consulted during generation. The tables are
//! turned into a [`MappingTables`](crate::MappingTables) value by
//! [`MappingTables::lodash_fp`](crate::MappingTables::lodash_fp) and from
//! there into an immutable store.

/// Functions grouped by the arity they are capped to.
pub const ARY_METHOD: &[(usize, &[&str])] = &[
    (
        1,
        &[
            "assignAll", "assignInAll", "attempt", "castArray", "ceil", "create", "curry",
            "curryRight", "defaultsAll", "defaultsDeepAll", "floor", "flow", "flowRight",
            "fromPairs", "invert", "iteratee", "memoize", "method", "mergeAll", "methodOf",
            "mixin", "nthArg", "over", "overEvery", "overSome", "rest", "reverse", "round",
            "runInContext", "spread", "template", "trim", "trimEnd", "trimStart", "uniqueId",
            "words", "zipAll",
        ],
    ),
    (
        2,
        &[
            "add", "after", "ary", "assign", "assignAllWith", "assignIn", "assignInAllWith",
            "at", "before", "bind", "bindAll", "bindKey", "chunk", "cloneDeepWith",
            "cloneWith", "concat", "conformsTo", "countBy", "curryN", "curryRightN",
            "debounce", "defaults", "defaultsDeep", "defaultTo", "delay", "difference",
            "divide", "drop", "dropRight", "dropRightWhile", "dropWhile", "endsWith", "eq",
            "every", "filter", "find", "findIndex", "findKey", "findLast", "findLastIndex",
            "findLastKey", "flatMap", "flatMapDeep", "flattenDepth", "forEach",
            "forEachRight", "forIn", "forInRight", "forOwn", "forOwnRight", "get", "groupBy",
            "gt", "gte", "has", "hasIn", "includes", "indexOf", "intersection", "invertBy",
            "invoke", "invokeMap", "isEqual", "isMatch", "join", "keyBy", "lastIndexOf", "lt",
            "lte", "map", "mapKeys", "mapValues", "matchesProperty", "maxBy", "meanBy",
            "merge", "mergeAllWith", "minBy", "multiply", "nth", "omit", "omitBy", "overArgs",
            "pad", "padEnd", "padStart", "parseInt", "partial", "partialRight", "partition",
            "pick", "pickBy", "propertyOf", "pull", "pullAll", "pullAt", "random", "range",
            "rangeRight", "rearg", "reject", "remove", "repeat", "restFrom", "result",
            "sampleSize", "some", "sortBy", "sortedIndex", "sortedIndexOf", "sortedLastIndex",
            "sortedLastIndexOf", "sortedUniqBy", "split", "spreadFrom", "startsWith",
            "subtract", "sumBy", "take", "takeRight", "takeRightWhile", "takeWhile", "tap",
            "throttle", "thru", "times", "trimChars", "trimCharsEnd", "trimCharsStart",
            "truncate", "union", "uniqBy", "uniqWith", "unset", "unzipWith", "without",
            "wrap", "xor", "zip", "zipObject", "zipObjectDeep",
        ],
    ),
    (
        3,
        &[
            "assignInWith", "assignWith", "clamp", "differenceBy", "differenceWith",
            "findFrom", "findIndexFrom", "findLastFrom", "findLastIndexFrom", "getOr",
            "includesFrom", "indexOfFrom", "inRange", "intersectionBy", "intersectionWith",
            "invokeArgs", "invokeArgsMap", "isEqualWith", "isMatchWith", "flatMapDepth",
            "lastIndexOfFrom", "mergeWith", "orderBy", "padChars", "padCharsEnd",
            "padCharsStart", "pullAllBy", "pullAllWith", "rangeStep", "rangeStepRight",
            "reduce", "reduceRight", "replace", "set", "slice", "sortedIndexBy",
            "sortedLastIndexBy", "transform", "unionBy", "unionWith", "update", "xorBy",
            "xorWith", "zipWith",
        ],
    ),
    (4, &["fill", "setWith", "updateWith"]),
];

/// Alternate exported names and the function each one re-exports.
///
/// Entries whose target is not capped by [`ARY_METHOD`] (`head`, `flatten`,
/// `constant`, ...) are carried here but never bound.
pub const ALIAS_TO_REAL: &[(&str, &str)] = &[
    ("each", "forEach"),
    ("eachRight", "forEachRight"),
    ("entries", "toPairs"),
    ("entriesIn", "toPairsIn"),
    ("extend", "assignIn"),
    ("extendAll", "assignInAll"),
    ("extendAllWith", "assignInAllWith"),
    ("extendWith", "assignInWith"),
    ("first", "head"),
    ("conforms", "conformsTo"),
    ("matches", "isMatch"),
    ("property", "get"),
    ("__", "placeholder"),
    ("F", "stubFalse"),
    ("T", "stubTrue"),
    ("all", "every"),
    ("allPass", "overEvery"),
    ("always", "constant"),
    ("any", "some"),
    ("anyPass", "overSome"),
    ("apply", "spread"),
    ("assoc", "set"),
    ("assocPath", "set"),
    ("complement", "negate"),
    ("compose", "flowRight"),
    ("contains", "includes"),
    ("dissoc", "unset"),
    ("dissocPath", "unset"),
    ("dropLast", "dropRight"),
    ("dropLastWhile", "dropRightWhile"),
    ("equals", "isEqual"),
    ("identical", "eq"),
    ("indexBy", "keyBy"),
    ("init", "initial"),
    ("invertObj", "invert"),
    ("juxt", "over"),
    ("omitAll", "omit"),
    ("nAry", "ary"),
    ("path", "get"),
    ("pathEq", "matchesProperty"),
    ("pathOr", "getOr"),
    ("paths", "at"),
    ("pickAll", "pick"),
    ("pipe", "flow"),
    ("pluck", "map"),
    ("prop", "get"),
    ("propEq", "matchesProperty"),
    ("propOr", "getOr"),
    ("props", "at"),
    ("symmetricDifference", "xor"),
    ("symmetricDifferenceBy", "xorBy"),
    ("symmetricDifferenceWith", "xorWith"),
    ("takeLast", "takeRight"),
    ("takeLastWhile", "takeRightWhile"),
    ("unapply", "rest"),
    ("unnest", "flatten"),
    ("useWith", "overArgs"),
    ("where", "conformsTo"),
    ("whereEq", "isMatch"),
    ("zipObj", "zipObject"),
];

/// Functions whose trailing arguments collapse into one array argument,
/// keyed by the index the spread starts at.
pub const METHOD_SPREAD: &[(&str, usize)] = &[
    ("assignAll", 0),
    ("assignAllWith", 0),
    ("assignInAll", 0),
    ("assignInAllWith", 0),
    ("defaultsAll", 0),
    ("defaultsDeepAll", 0),
    ("invokeArgs", 2),
    ("invokeArgsMap", 2),
    ("mergeAll", 0),
    ("mergeAllWith", 0),
    ("partial", 1),
    ("partialRight", 1),
    ("without", 1),
    ("zipAll", 0),
];

/// Functions taking an iteratee, keyed by the number of arguments the
/// iteratee is capped to.
pub const ITERATEE_ARY: &[(&str, u8)] = &[
    ("dropRightWhile", 1),
    ("dropWhile", 1),
    ("every", 1),
    ("filter", 1),
    ("find", 1),
    ("findFrom", 1),
    ("findIndex", 1),
    ("findIndexFrom", 1),
    ("findKey", 1),
    ("findLast", 1),
    ("findLastFrom", 1),
    ("findLastIndex", 1),
    ("findLastIndexFrom", 1),
    ("findLastKey", 1),
    ("flatMap", 1),
    ("flatMapDeep", 1),
    ("flatMapDepth", 1),
    ("forEach", 1),
    ("forEachRight", 1),
    ("forIn", 1),
    ("forInRight", 1),
    ("forOwn", 1),
    ("forOwnRight", 1),
    ("map", 1),
    ("mapKeys", 1),
    ("mapValues", 1),
    ("partition", 1),
    ("reduce", 2),
    ("reduceRight", 2),
    ("reject", 1),
    ("remove", 1),
    ("some", 1),
    ("takeRightWhile", 1),
    ("takeWhile", 1),
    ("times", 1),
    ("transform", 2),
];
