pub struct TestModel {
    pub source: &'static str,
    pub faces: usize,
}

pub const OBJ_TRIANGLE: TestModel = TestModel {
    source: include_str!("../../../res/triangle.obj"),
    faces: 1,
};

pub const OBJ_CUBE: TestModel = TestModel {
    source: include_str!("../../../res/cube.obj"),
    faces: 12,
};
